//! Module defining [`Context`], the single interpreter-state object tying
//! together a borrowed registry, a borrowed script, and the scan cursor.

use crate::chars::{is_blank, is_squote};
use crate::control_flow::BoolComposing;
use crate::registry::Registry;
use crate::status::Status;
use std::any::Any;

/// The interpreter-state object.
///
/// Holds a borrowed [`Registry`], a borrowed script `text`, the `cursor`
/// scanning through it, the boolean accumulator used by the control-flow
/// core, and an opaque `userdata` slot a host can stash per-run state in
/// (untouched by the core, mirroring the C original's `void*`).
///
/// # Thread Safety
///
/// Not safe for concurrent use by multiple threads. Multiple `Context`s may
/// run in parallel over the same [`Registry`] as long as each stays on its
/// own thread.
pub struct Context<'a> {
    pub(crate) registry: &'a Registry,
    pub(crate) text: Option<&'a str>,
    pub(crate) cursor: usize,
    pub(crate) bool_value: bool,
    pub(crate) bool_composing: BoolComposing,
    userdata: Option<Box<dyn Any>>,
    #[cfg(feature = "trace")]
    trace: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl<'a> Context<'a> {
    /// Open a context bound to `registry`. No script is loaded yet.
    #[must_use]
    pub fn open(registry: &'a Registry) -> Self {
        Self {
            registry,
            text: None,
            cursor: 0,
            bool_value: false,
            bool_composing: BoolComposing::Nil,
            userdata: None,
            #[cfg(feature = "trace")]
            trace: None,
        }
    }

    /// Clear every field, detaching any loaded script. Equivalent to
    /// dropping and re-[`open`][Self::open]ing, kept as an explicit
    /// operation to mirror the host-facing lifecycle of `spec.md` §6.
    pub fn close(&mut self) {
        self.text = None;
        self.cursor = 0;
        self.bool_value = false;
        self.bool_composing = BoolComposing::Nil;
        self.userdata = None;
    }

    /// Load a script. If a previous script was loaded, it is unloaded first.
    pub fn load(&mut self, text: &'a str) {
        if self.text.is_some() {
            self.unload();
        }
        self.text = Some(text);
        self.cursor = 0;
    }

    /// Rewind the cursor to the start of the current script.
    ///
    /// # Panics
    ///
    /// Panics if no script is loaded — reloading nothing is a programmer
    /// error, not a recoverable [`Status`].
    pub fn reload(&mut self) {
        assert!(self.text.is_some(), "reload called with no script loaded");
        self.cursor = 0;
    }

    /// Detach the current script. The cursor becomes invalid until the next
    /// [`load`][Self::load].
    pub fn unload(&mut self) {
        self.text = None;
        self.cursor = 0;
    }

    /// Install an opaque per-context userdata slot, replacing the C
    /// original's untyped `void*` with a checked downcast.
    pub fn set_userdata<T: 'static>(&mut self, value: T) {
        self.userdata = Some(Box::new(value));
    }

    /// Borrow the userdata slot as `T`, or `None` if unset or of a different
    /// type.
    #[must_use]
    pub fn userdata<T: 'static>(&self) -> Option<&T> {
        self.userdata.as_deref()?.downcast_ref()
    }

    /// Mutably borrow the userdata slot as `T`.
    #[must_use]
    pub fn userdata_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.userdata.as_deref_mut()?.downcast_mut()
    }

    /// Register a trace sink invoked with a short description at every
    /// dispatched token, for hosts that want to observe execution. Only
    /// present under the `trace` feature — the teacher crate keeps this kind
    /// of hook optional and host-driven rather than baking in a logging
    /// dependency (see `SPEC_FULL.md` §2).
    #[cfg(feature = "trace")]
    pub fn set_trace<F: FnMut(&str) + 'a>(&mut self, sink: F) {
        self.trace = Some(Box::new(sink));
    }

    #[cfg(feature = "trace")]
    pub(crate) fn emit_trace(&mut self, msg: &str) {
        if let Some(sink) = self.trace.as_mut() {
            sink(msg);
        }
    }

    #[cfg(not(feature = "trace"))]
    #[inline(always)]
    pub(crate) fn emit_trace(&mut self, _msg: &str) {}

    /// The full loaded script text, or `None` if nothing is loaded.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        self.text
    }

    /// Current byte offset of the scan cursor into [`text`][Self::text].
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the cursor has reached the end of the loaded script.
    #[must_use]
    pub fn at_end(&self) -> bool {
        match self.text {
            Some(text) => self.cursor >= text.len(),
            None => true,
        }
    }

    /// The unread remainder of the script, from the cursor onward.
    ///
    /// # Panics
    ///
    /// Panics if no script is loaded.
    #[must_use]
    pub(crate) fn tail(&self) -> &'a str {
        let text = self.text.expect("operation requires a loaded script");
        &text[self.cursor..]
    }

    #[must_use]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.text.and_then(|t| t.as_bytes().get(offset).copied())
    }

    /// Advance the cursor by `n` bytes. Used by the dispatcher and the
    /// control-flow core after identifying a token's length.
    pub(crate) fn advance_cursor(&mut self, n: usize) {
        self.cursor += n;
    }

    /// Advance the cursor past consecutive blank bytes, returning the count
    /// advanced.
    pub(crate) fn trim(&mut self) -> usize {
        let mut n = 0;
        while let Some(b) = self.byte_at(self.cursor) {
            if !is_blank(b) {
                break;
            }
            self.cursor += 1;
            n += 1;
        }
        n
    }

    /// Consume a single `'...'` comment span starting at the cursor.
    ///
    /// Bounded by the script length: a comment with no closing quote
    /// consumes to end-of-input and reports `Status::Ok`, matching the C
    /// original's tolerance for a missing terminator, but never reads past
    /// the buffer (`spec.md` §9, "unterminated comment" open question).
    pub fn skip_comment(&mut self) -> Status {
        match self.byte_at(self.cursor) {
            Some(b) if is_squote(b) => {
                self.cursor += 1;
                loop {
                    match self.byte_at(self.cursor) {
                        None => break,
                        Some(b) if is_squote(b) => {
                            self.cursor += 1;
                            break;
                        }
                        Some(_) => self.cursor += 1,
                    }
                }
                Status::Ok
            }
            _ => Status::NoComment,
        }
    }

    /// Advance past every blank and comment span at the cursor, per
    /// `spec.md` §4.2: trim blanks, try a comment, trim blanks again,
    /// repeating while the cursor still sits on a blank or a `'`.
    pub(crate) fn skip_meaningless(&mut self) {
        loop {
            match self.byte_at(self.cursor) {
                Some(b) if is_blank(b) || is_squote(b) => {
                    self.trim();
                    if self.skip_comment() == Status::Ok {
                        self.trim();
                    }
                }
                _ => break,
            }
        }
    }
}
