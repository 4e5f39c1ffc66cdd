//! Host-facing lifecycle: open / load / reload / unload / run / step.

use xpl::{Context, RegistryBuilder, Status};

fn noop(_ctx: &mut Context) -> Status {
    Status::Ok
}

#[test]
fn reload_restores_identical_behaviour_to_a_fresh_load() {
    let registry = RegistryBuilder::new().register("noop", noop).build();
    let mut ctx = Context::open(&registry);

    ctx.load("noop noop noop");
    assert_eq!(ctx.run(), Status::Ok);
    assert!(ctx.at_end());

    ctx.reload();
    assert_eq!(ctx.cursor(), 0);
    assert_eq!(ctx.run(), Status::Ok);
    assert!(ctx.at_end());
}

#[test]
fn load_replaces_a_previously_loaded_script() {
    let registry = RegistryBuilder::new().register("noop", noop).build();
    let mut ctx = Context::open(&registry);

    ctx.load("noop");
    ctx.step();
    assert!(ctx.at_end());

    ctx.load("noop noop");
    assert_eq!(ctx.cursor(), 0);
    assert_eq!(ctx.run(), Status::Ok);
}

#[test]
fn unload_detaches_the_script() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("");
    ctx.unload();
    assert!(ctx.text().is_none());
    assert!(ctx.at_end());
}

#[test]
fn close_clears_every_field() {
    let registry = RegistryBuilder::new().register("noop", noop).build();
    let mut ctx = Context::open(&registry);
    ctx.load("noop");
    ctx.set_userdata(7_i32);
    ctx.close();
    assert!(ctx.text().is_none());
    assert!(ctx.userdata::<i32>().is_none());
}

#[test]
fn empty_script_runs_to_ok_immediately() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("");
    assert_eq!(ctx.run(), Status::Ok);
}
