//! The dispatcher: identifies the next token as a callback name or a comma
//! separator, advances the cursor past it, and invokes the callback.

use crate::context::Context;
use crate::registry::Entry;
use crate::status::Status;

/// Classify the next token at the cursor without invoking anything.
///
/// Skips meaningless bytes first. A comma is consumed and reported as
/// `Ok(None)` — it is the explicit argument-list separator between
/// invocations, not a callback. Otherwise the registry is searched using the
/// cursor as key; `Err(Status::Err)` if the token names nothing registered.
pub(crate) fn peek_func(ctx: &mut Context) -> Result<Option<Entry>, Status> {
    ctx.skip_meaningless();
    match ctx.text().and_then(|t| t.as_bytes().get(ctx.cursor()).copied()) {
        Some(b',') => {
            ctx.advance_cursor(1);
            Ok(None)
        }
        _ => match ctx.registry.lookup(ctx.tail()) {
            Some(entry) => Ok(Some(*entry)),
            None => Err(Status::Err),
        },
    }
}

/// Dispatch exactly one token: a bare comma is consumed and reported `Ok`,
/// otherwise the matched callback is invoked after the cursor is advanced
/// past its name and any following meaningless span.
pub(crate) fn step(ctx: &mut Context) -> Status {
    let entry = match peek_func(ctx) {
        Err(status) => return status,
        Ok(None) => return Status::Ok,
        Ok(Some(entry)) => entry,
    };
    ctx.advance_cursor(entry.name.len());
    ctx.skip_meaningless();
    (entry.callback)(ctx)
}

/// Drive [`step`] to completion, suspension, or error.
///
/// Loops while the cursor has not reached end-of-input and the previous
/// step returned `Status::Ok`. A `yield` leaves the cursor immediately after
/// the keyword, so a later call to `run` resumes there.
pub(crate) fn run(ctx: &mut Context) -> Status {
    let mut status = Status::Ok;
    while !ctx.at_end() && status.is_ok() {
        status = step(ctx);
    }
    status
}

impl<'a> Context<'a> {
    /// Drive the interpreter to completion, suspension, or error.
    ///
    /// # Panics
    ///
    /// Panics if no script is loaded.
    pub fn run(&mut self) -> Status {
        assert!(self.text().is_some(), "run called with no script loaded");
        run(self)
    }

    /// Dispatch exactly one token.
    ///
    /// # Panics
    ///
    /// Panics if no script is loaded.
    pub fn step(&mut self) -> Status {
        assert!(self.text().is_some(), "step called with no script loaded");
        step(self)
    }

    /// Classify the next token without invoking anything: `Ok(None)` for a
    /// consumed comma, `Ok(Some(name))` for a registered interface name, or
    /// `Err(Status::Err)` for an unrecognised token.
    ///
    /// # Panics
    ///
    /// Panics if no script is loaded.
    pub fn peek_func(&mut self) -> Result<Option<&'static str>, Status> {
        assert!(self.text().is_some(), "peek_func called with no script loaded");
        peek_func(self).map(|entry| entry.map(|e| e.name))
    }
}
