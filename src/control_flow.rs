//! The structured-if evaluator: `if`/`then`/`elseif`/`else`/`endif`, the
//! boolean combinators `or`/`and`, and `yield` suspension.
//!
//! `if`, `elseif`, `else`, and `endif` are no-ops when dispatched as regular
//! callbacks — they exist only to be recognised as tokens. All the work
//! lives in [`core_then`].
//!
//! Nested `if` is **not** supported: `then`'s branch skipper stops at the
//! first `endif` it sees, not a depth-balanced one, matching the documented
//! restriction of the C original (`spec.md` §9). A script with a nested
//! conditional inside a taken branch will misbehave; this is a known,
//! intentionally preserved limitation rather than an oversight.

use crate::context::Context;
use crate::dispatch::peek_func;
use crate::registry::Builtin;
use crate::status::Status;

/// How the next [`Context::push_bool`] combines with the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolComposing {
    /// Overwrite the accumulator with the pushed value.
    Nil,
    /// Bitwise-or the pushed value into the accumulator.
    Or,
    /// Bitwise-and the pushed value into the accumulator.
    And,
}

pub(crate) fn core_if(_ctx: &mut Context) -> Status {
    Status::Ok
}

pub(crate) fn core_elseif(_ctx: &mut Context) -> Status {
    Status::Ok
}

pub(crate) fn core_else(_ctx: &mut Context) -> Status {
    Status::Ok
}

pub(crate) fn core_endif(_ctx: &mut Context) -> Status {
    Status::Ok
}

pub(crate) fn core_or(ctx: &mut Context) -> Status {
    ctx.bool_composing = BoolComposing::Or;
    Status::Ok
}

pub(crate) fn core_and(ctx: &mut Context) -> Status {
    ctx.bool_composing = BoolComposing::And;
    Status::Ok
}

/// Suspend execution. Returns `Status::Suspend` without touching the
/// cursor beyond where the dispatcher already left it — resumption is
/// purely structural: the next `run` continues from the token after
/// `yield`.
pub(crate) fn core_yield(_ctx: &mut Context) -> Status {
    Status::Suspend
}

fn is_branch_boundary(builtin: Option<Builtin>) -> bool {
    matches!(builtin, Some(Builtin::ElseIf) | Some(Builtin::Else) | Some(Builtin::EndIf))
}

/// `then`: the whole of the conditional's branch-taking/branch-skipping
/// logic, per the state machine in `spec.md` §4.6.
///
/// Resets `bool_value`/`bool_composing` to `0`/`Nil` on entry regardless of
/// which way the branch goes (`spec.md` invariant: "when control flow enters
/// a `then`-taken branch, `bool_value` and `bool_composing` are reset before
/// evaluating that branch" — the reset also covers the not-taken case, since
/// both paths must start the next predicate run from a clean slate).
pub(crate) fn core_then(ctx: &mut Context) -> Status {
    let taken = ctx.bool_value;
    ctx.bool_value = false;
    ctx.bool_composing = BoolComposing::Nil;

    if taken {
        execute_branch(ctx)
    } else {
        skip_to_branch(ctx)
    }
}

/// EXECUTE, then SKIP_TO_ENDIF: run the taken branch's callbacks, stopping
/// at the first `elseif`/`else`/`endif`; then advance past tokens without
/// invoking them until `endif` is consumed.
///
/// SKIP_TO_ENDIF never invokes the callbacks it passes over, so nothing
/// else pops their literal arguments; a token that isn't a comma and
/// doesn't resolve in the registry is treated as exactly such an
/// argument and discarded via `scan_literal` rather than reported as an
/// unknown token.
fn execute_branch(ctx: &mut Context) -> Status {
    loop {
        if ctx.at_end() {
            return Status::Ok;
        }
        match peek_func(ctx) {
            Err(status) => return status,
            Ok(None) => continue,
            Ok(Some(entry)) => {
                if is_branch_boundary(entry.builtin) {
                    break;
                }
                ctx.advance_cursor(entry.name.len());
                ctx.skip_meaningless();
                let status = (entry.callback)(ctx);
                if !status.is_ok() {
                    return status;
                }
            }
        }
    }

    loop {
        if ctx.at_end() {
            return Status::Ok;
        }
        match peek_func(ctx) {
            Err(_) => {
                if let Err(status) = ctx.scan_literal() {
                    return status;
                }
            }
            Ok(None) => continue,
            Ok(Some(entry)) => {
                ctx.advance_cursor(entry.name.len());
                if entry.builtin == Some(Builtin::EndIf) {
                    return Status::Ok;
                }
            }
        }
    }
}

/// SKIP_TO_BRANCH: advance past tokens without invoking them until an
/// `elseif`/`else`/`endif` is found; the cursor is left just before that
/// keyword so the outer dispatch loop invokes it next (a dummy, for
/// `elseif`/`endif`, or the start of an unconditionally-run body for
/// `else`).
///
/// As in SKIP_TO_ENDIF above, a token that isn't a comma and doesn't
/// resolve in the registry is a skipped callback's literal argument,
/// not an unknown token — it is scanned and discarded via
/// `scan_literal` so the loop can continue past it.
fn skip_to_branch(ctx: &mut Context) -> Status {
    loop {
        if ctx.at_end() {
            return Status::Ok;
        }
        match peek_func(ctx) {
            Err(_) => {
                if let Err(status) = ctx.scan_literal() {
                    return status;
                }
            }
            Ok(None) => continue,
            Ok(Some(entry)) => {
                if is_branch_boundary(entry.builtin) {
                    return Status::Ok;
                }
                ctx.advance_cursor(entry.name.len());
            }
        }
    }
}
