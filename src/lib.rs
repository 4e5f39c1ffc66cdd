//! # XPL — a tiny embeddable command-oriented scripting interpreter
//!
//! XPL interprets a flat, whitespace-separated sequence of tokens naming
//! host-registered callbacks, interleaved with literal arguments those
//! callbacks consume. It adds a small structured-if control-flow layer
//! (`if` / `then` / `elseif` / `else` / `endif`, the boolean combinators
//! `or` / `and`, and a `yield` suspension primitive) on top of that
//! dispatch loop.
//!
//! There is no expression grammar, no variables, and no script-defined
//! functions — XPL dispatches by name and lets literal arguments and a
//! single boolean accumulator do the rest. See the project's `SPEC_FULL.md`
//! for the full design.
//!
//! # A Quick Example
//!
//! ```
//! use xpl::{Context, RegistryBuilder, Status};
//!
//! fn greet(ctx: &mut Context) -> Status {
//!     match ctx.pop_string() {
//!         Ok(name) => {
//!             println!("hello, {name}");
//!             Status::Ok
//!         }
//!         Err(status) => status,
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register("greet", greet).build();
//! let mut ctx = Context::open(&registry);
//! ctx.load("greet \"world\"");
//! assert_eq!(ctx.run(), Status::Ok);
//! ```

mod args;
mod chars;
mod context;
mod control_flow;
mod dispatch;
mod registry;
mod status;

pub use context::Context;
pub use control_flow::BoolComposing;
pub use registry::{Builtin, Callback, Registry, RegistryBuilder};
pub use status::Status;
