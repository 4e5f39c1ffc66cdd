//! The callback registry: built-ins, user registration, and duplicate
//! detection.

use xpl::{Context, RegistryBuilder, Status};

fn noop(_ctx: &mut Context) -> Status {
    Status::Ok
}

#[test]
fn unknown_token_is_a_dispatch_error() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("not_a_real_callback");
    assert_eq!(ctx.run(), Status::Err);
}

#[test]
fn registered_callback_is_dispatched_by_name() {
    let registry = RegistryBuilder::new().register("ping", noop).build();
    let mut ctx = Context::open(&registry);
    ctx.load("ping");
    assert_eq!(ctx.run(), Status::Ok);
}

#[test]
#[should_panic(expected = "duplicate interface name")]
fn registering_a_built_in_name_twice_panics_at_build() {
    RegistryBuilder::new().register("if", noop).build();
}

#[test]
fn names_are_case_sensitive() {
    let registry = RegistryBuilder::new().register("Ping", noop).build();
    let mut ctx = Context::open(&registry);
    ctx.load("ping");
    assert_eq!(ctx.run(), Status::Err);
}
