//! Module defining the result type for interpreter operations.

use std::fmt;

/// Outcome of an interpreter operation.
///
/// [`Status::Ok`] is the only "continue" value. [`Status::Suspend`] halts the
/// outer [`run`][crate::Context::run] loop but leaves the [`Context`][crate::Context]
/// resumable. Every other variant is terminal for the current `run`.
///
/// # Thread Safety
///
/// [`Status`] is a plain value type and is `Send` + `Sync` whenever its (none)
/// payload types are, which they always are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Status {
    /// Totally OK, keep going.
    Ok,
    /// A `yield` callback suspended execution. Not an error.
    Suspend,
    /// A callback reported a generic failure, or dispatch hit an unknown token.
    Err,
    /// A destination buffer passed to [`pop_str_into`][crate::Context::pop_str_into]
    /// was too small to hold the literal.
    NoEnoughBuffer,
    /// [`skip_comment`][crate::Context::skip_comment] found no comment to skip.
    NoComment,
    /// [`has_param`][crate::Context::has_param] found no argument to pop.
    NoParam,
    /// A popped literal failed to parse as the requested numeric type.
    ParamTypeError,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Suspend => f.write_str("suspended at a yield point"),
            Self::Err => f.write_str("script error"),
            Self::NoEnoughBuffer => f.write_str("destination buffer too small"),
            Self::NoComment => f.write_str("no comment at cursor"),
            Self::NoParam => f.write_str("no parameter at cursor"),
            Self::ParamTypeError => f.write_str("parameter failed to parse"),
        }
    }
}

impl std::error::Error for Status {}

impl Status {
    /// True for [`Status::Ok`] only — the value that lets an outer loop continue.
    #[inline(always)]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// True for [`Status::Suspend`] — not an error, but not a continue either.
    #[inline(always)]
    #[must_use]
    pub const fn is_suspend(self) -> bool {
        matches!(self, Self::Suspend)
    }
}
