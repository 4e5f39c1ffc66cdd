//! Byte-level classifier predicates shared by the scanner, the registry
//! comparator, and the argument extractor.

/// Is `c` a single quote, the comment delimiter.
#[inline(always)]
#[must_use]
pub const fn is_squote(c: u8) -> bool {
    c == b'\''
}

/// Is `c` a double quote, the string-literal delimiter.
#[inline(always)]
#[must_use]
pub const fn is_dquote(c: u8) -> bool {
    c == b'"'
}

/// Is `c` the explicit argument-list separator.
#[inline(always)]
#[must_use]
pub const fn is_comma(c: u8) -> bool {
    c == b','
}

#[inline(always)]
#[must_use]
pub const fn is_exclamation(c: u8) -> bool {
    c == b'!'
}

#[inline(always)]
#[must_use]
pub const fn is_colon(c: u8) -> bool {
    c == b':'
}

/// Is `c` whitespace: space, tab, carriage return, or line feed.
#[inline(always)]
#[must_use]
pub const fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

/// Is `c` any byte that ends a bareword token.
///
/// Barewords (registry names and unquoted string literals) run until the
/// first `separator` byte, which is never consumed as part of the token.
#[inline(always)]
#[must_use]
pub const fn is_separator(c: u8) -> bool {
    is_blank(c)
        || is_comma(c)
        || is_exclamation(c)
        || is_colon(c)
        || is_squote(c)
        || is_dquote(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_cover_every_delimiter() {
        for &b in b" \t\r\n,!:'\"" {
            assert!(is_separator(b), "{:?} should be a separator", b as char);
        }
        for &b in b"abcXYZ_0123456789" {
            assert!(!is_separator(b), "{:?} should not be a separator", b as char);
        }
    }
}
