//! The argument-extraction API callbacks use to pull literals out of the
//! script buffer: `has_param`, `pop_int`, `pop_float`, `pop_string`,
//! `push_bool`.

use crate::chars::{is_dquote, is_separator};
use crate::context::Context;
use crate::control_flow::BoolComposing;
use crate::status::Status;

impl<'a> Context<'a> {
    /// Report whether an argument sits at the cursor without consuming it.
    ///
    /// Skips meaningless bytes first. [`Status::NoParam`] if the next byte
    /// is a comma or the next token resolves to a registered interface name
    /// (both of those terminate an argument list rather than starting a
    /// literal); [`Status::Ok`] otherwise.
    pub fn has_param(&mut self) -> Status {
        self.skip_meaningless();
        match self.text.and_then(|t| t.as_bytes().get(self.cursor).copied()) {
            Some(b) if b == b',' => Status::NoParam,
            _ => {
                if self.registry.lookup(self.tail()).is_some() {
                    Status::NoParam
                } else {
                    Status::Ok
                }
            }
        }
    }

    /// Scan the next literal — quoted or bareword — without copying,
    /// returning a slice of the original script and advancing the cursor
    /// past it.
    ///
    /// Bounded by the script's length: an opening `"` with no matching
    /// closing `"` before end-of-input is an error (`spec.md` §9,
    /// "unterminated string" open question) rather than a read past the
    /// buffer.
    ///
    /// Also used by the control-flow core to discard an un-invoked
    /// callback's trailing literal argument while skipping a branch.
    pub(crate) fn scan_literal(&mut self) -> Result<&'a str, Status> {
        let text = self.text.expect("pop requires a loaded script");
        let bytes = text.as_bytes();
        let start;
        let end;
        if bytes.get(self.cursor).copied().is_some_and(is_dquote) {
            start = self.cursor + 1;
            let mut i = start;
            loop {
                match bytes.get(i) {
                    None => return Err(Status::Err),
                    Some(&b) if is_dquote(b) => {
                        end = i;
                        self.cursor = i + 1;
                        break;
                    }
                    Some(_) => i += 1,
                }
            }
        } else {
            start = self.cursor;
            let mut i = start;
            while bytes.get(i).copied().is_some_and(|b| !is_separator(b)) {
                i += 1;
            }
            end = i;
            self.cursor = i;
        }
        Ok(&text[start..end])
    }

    /// Pop the next literal into a caller-provided buffer without
    /// allocating.
    ///
    /// `buf` must hold the literal plus one spare byte — mirroring the C
    /// original's `cap` argument, which reserved room for a trailing NUL
    /// even though this port writes no terminator of its own.
    pub fn pop_str_into<'b>(&mut self, buf: &'b mut [u8]) -> Result<&'b str, Status> {
        let literal = self.scan_literal()?;
        if literal.len() + 1 > buf.len() {
            return Err(Status::NoEnoughBuffer);
        }
        buf[..literal.len()].copy_from_slice(literal.as_bytes());
        Ok(std::str::from_utf8(&buf[..literal.len()]).unwrap())
    }

    /// Pop the next literal into a freshly allocated [`String`].
    ///
    /// Convenience wrapper around [`pop_str_into`][Self::pop_str_into] for
    /// callbacks that don't want to manage their own buffer.
    pub fn pop_string(&mut self) -> Result<String, Status> {
        self.scan_literal().map(str::to_owned)
    }

    /// Pop the next literal and parse it as a signed integer, allowing
    /// base-0 prefix detection (decimal, `0x...` hex, leading-`0` octal) —
    /// per `spec.md` §6, "Integer literals".
    pub fn pop_int(&mut self) -> Result<i32, Status> {
        let mut buf = [0u8; 32];
        let literal = self.pop_str_into(&mut buf)?;
        parse_int_base0(literal).ok_or(Status::ParamTypeError)
    }

    /// Pop the next literal and parse it as a floating-point number,
    /// narrowed to single precision.
    pub fn pop_float(&mut self) -> Result<f32, Status> {
        let mut buf = [0u8; 32];
        let literal = self.pop_str_into(&mut buf)?;
        literal
            .parse::<f64>()
            .map(|v| v as f32)
            .map_err(|_| Status::ParamTypeError)
    }

    /// Push a boolean into the accumulator, combined per the current
    /// composing mode: `Nil` overwrites, `Or` bitwise-ors, `And`
    /// bitwise-ands. The composing mode itself is unchanged.
    pub fn push_bool(&mut self, b: bool) {
        self.bool_value = match self.bool_composing {
            BoolComposing::Nil => b,
            BoolComposing::Or => self.bool_value || b,
            BoolComposing::And => self.bool_value && b,
        };
    }
}

/// Parse a signed 32-bit integer the way C's `strtol(s, &end, 0)` would:
/// `0x`/`0X` prefix selects hex, a lone leading `0` (with more digits)
/// selects octal, anything else is decimal. Fails if any trailing
/// non-empty suffix remains.
fn parse_int_base0(s: &str) -> Option<i32> {
    let (neg, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let magnitude: i64 = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if rest.len() > 1 && rest.starts_with('0') {
        i64::from_str_radix(&rest[1..], 8).ok()?
    } else {
        rest.parse::<i64>().ok()?
    };
    let signed = if neg { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}
