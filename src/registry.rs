//! Module defining the callback registry: an ordered, immutable table of
//! `(name, callback)` pairs queried by a separator-terminated binary search.

use crate::context::Context;
use crate::status::Status;
use std::cmp::Ordering;

/// Signature every registered interface must satisfy.
///
/// A callback receives the [`Context`] it is running under, pulls whatever
/// literal arguments it needs via [`Context::has_param`]/`pop_*`, optionally
/// pushes a boolean via [`Context::push_bool`], and reports a [`Status`].
pub type Callback = for<'ctx> fn(&mut Context<'ctx>) -> Status;

/// Which built-in control-flow keyword a registry entry is, if any.
///
/// User-registered callbacks share the same table as the eight built-ins;
/// tagging each entry lets [`crate::control_flow`] branch on what a matched
/// entry *is* rather than comparing function-pointer identity, which is not
/// generally meaningful for `fn` items in Rust (and isn't reliable even in C,
/// where it merely happens to work).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    If,
    Then,
    ElseIf,
    Else,
    EndIf,
    Or,
    And,
    Yield,
}

/// One `(name, callback)` row of the registry.
#[derive(Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub callback: Callback,
    pub builtin: Option<Builtin>,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("builtin", &self.builtin)
            .finish()
    }
}

/// Separator-terminated comparison between a script cursor and a registry
/// name.
///
/// A bareword token in the script is not itself NUL- or otherwise
/// terminated; it simply runs until the next [`separator`][crate::chars::is_separator]
/// byte. This comparator treats the first separator byte in `cursor_tail` as
/// end-of-string, so the raw script cursor can be used directly as a lookup
/// key without first copying the token out into its own buffer.
#[must_use]
pub fn cmp_cursor_name(cursor_tail: &str, name: &str) -> Ordering {
    let mut c = cursor_tail.bytes();
    let mut n = name.bytes();
    loop {
        let cb = c.next();
        let nb = n.next();
        let cb = match cb {
            Some(b) if crate::chars::is_separator(b) => None,
            other => other,
        };
        match (cb, nb) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

/// The closed, sorted set of callbacks a [`Context`][crate::Context] was
/// opened with.
///
/// Built once via [`RegistryBuilder`] and immutable for the lifetime of every
/// [`Context`] that borrows it; the registry itself may be shared across
/// threads (it is `Sync`) as long as each `Context` borrowing it stays on one
/// thread.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Binary search the registry using the script cursor as the key.
    ///
    /// Returns the matching [`Entry`], or `None` if the token at the cursor
    /// does not name a registered interface.
    #[must_use]
    pub(crate) fn lookup(&self, cursor_tail: &str) -> Option<&Entry> {
        self.entries
            .binary_search_by(|entry| cmp_cursor_name(cursor_tail, entry.name).reverse())
            .ok()
            .map(|i| &self.entries[i])
    }
}

/// Builder that assembles a [`Registry`], pre-seeded with the eight built-in
/// control-flow keywords (`if`, `then`, `elseif`, `else`, `endif`, `or`,
/// `and`, `yield`).
///
/// Grounded on the builder style of `Engine::register_fn` in the teacher
/// crate: the host chains `.register(name, callback)` calls rather than
/// constructing a sentinel-terminated C array by hand.
///
/// # Example
///
/// ```
/// use xpl::{Context, RegistryBuilder, Status};
///
/// fn greet(_ctx: &mut Context) -> Status {
///     println!("hi");
///     Status::Ok
/// }
///
/// let registry = RegistryBuilder::new().register("greet", greet).build();
/// let mut ctx = Context::open(&registry);
/// ctx.load("greet");
/// assert_eq!(ctx.run(), Status::Ok);
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    entries: Vec<Entry>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Start a new builder pre-seeded with the eight built-in keywords.
    #[must_use]
    pub fn new() -> Self {
        use crate::control_flow::{core_and, core_else, core_elseif, core_endif, core_if, core_or, core_then, core_yield};
        Self {
            entries: vec![
                Entry { name: "if", callback: core_if, builtin: Some(Builtin::If) },
                Entry { name: "then", callback: core_then, builtin: Some(Builtin::Then) },
                Entry { name: "elseif", callback: core_elseif, builtin: Some(Builtin::ElseIf) },
                Entry { name: "else", callback: core_else, builtin: Some(Builtin::Else) },
                Entry { name: "endif", callback: core_endif, builtin: Some(Builtin::EndIf) },
                Entry { name: "or", callback: core_or, builtin: Some(Builtin::Or) },
                Entry { name: "and", callback: core_and, builtin: Some(Builtin::And) },
                Entry { name: "yield", callback: core_yield, builtin: Some(Builtin::Yield) },
            ],
        }
    }

    /// Register a host callback under `name`.
    ///
    /// Names are matched case-sensitively and must be unique; registering
    /// the same name twice is a programmer error caught by [`Self::build`].
    #[must_use]
    pub fn register(mut self, name: &'static str, callback: Callback) -> Self {
        self.entries.push(Entry { name, callback, builtin: None });
        self
    }

    /// Sort the table and freeze it into a [`Registry`].
    ///
    /// # Panics
    ///
    /// Panics if two entries share a name — a closed, ambiguous registry
    /// would make every future lookup unsound to reason about.
    #[must_use]
    pub fn build(mut self) -> Registry {
        self.entries.sort_by(|a, b| a.name.cmp(b.name));
        for pair in self.entries.windows(2) {
            assert!(
                pair[0].name != pair[1].name,
                "duplicate interface name in registry: {:?}",
                pair[0].name
            );
        }
        Registry { entries: self.entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_ctx: &mut Context) -> Status {
        Status::Ok
    }

    #[test]
    fn cmp_treats_separator_as_terminator() {
        assert_eq!(cmp_cursor_name("if then test3", "if"), Ordering::Equal);
        assert_eq!(cmp_cursor_name("iffy", "if"), Ordering::Greater);
        assert_eq!(cmp_cursor_name("if,", "if"), Ordering::Equal);
        assert_eq!(cmp_cursor_name("i", "if"), Ordering::Less);
    }

    #[test]
    fn builtins_are_present_and_sorted() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.lookup("yield").is_some());
        assert!(registry.lookup("if x").is_some());
        assert!(registry.lookup("nope").is_none());
    }

    #[test]
    fn user_interfaces_coexist_with_builtins() {
        let registry = RegistryBuilder::new().register("test3", noop).build();
        let entry = registry.lookup("test3 endif").expect("test3 should resolve");
        assert_eq!(entry.name, "test3");
        assert!(entry.builtin.is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate interface name")]
    fn duplicate_names_panic_at_build() {
        RegistryBuilder::new()
            .register("dup", noop)
            .register("dup", noop)
            .build();
    }
}
