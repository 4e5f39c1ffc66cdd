//! A minimal host program, reproducing the callbacks and script of
//! `examples/original_source/trunk/test.c`.
//!
//! Run with `cargo run --example host` once this file is wired into
//! `Cargo.toml`'s `[[example]]` table (kept here under `demos/` rather than
//! `examples/`, which in this workspace is reserved for retrieved reference
//! material).

use xpl::{Context, RegistryBuilder, Status};

fn test1(ctx: &mut Context) -> Status {
    println!("test1");
    if ctx.has_param() == Status::Ok {
        match ctx.pop_float() {
            Ok(f) => println!("has_param {f}"),
            Err(status) => return status,
        }
    }
    Status::Ok
}

fn test2(ctx: &mut Context) -> Status {
    println!("test2");
    if ctx.has_param() == Status::Ok {
        match ctx.pop_string() {
            Ok(s) => println!("has_param {s}"),
            Err(status) => return status,
        }
    }
    Status::Ok
}

fn test3(_ctx: &mut Context) -> Status {
    println!("test3");
    Status::Ok
}

fn cond1(ctx: &mut Context) -> Status {
    println!("cond1");
    ctx.push_bool(false);
    Status::Ok
}

fn cond2(ctx: &mut Context) -> Status {
    println!("cond2");
    ctx.push_bool(true);
    Status::Ok
}

fn main() {
    let registry = RegistryBuilder::new()
        .register("test1", test1)
        .register("test2", test2)
        .register("test3", test3)
        .register("cond1", cond1)
        .register("cond2", cond2)
        .build();

    let mut ctx = Context::open(&registry);
    ctx.load("if cond1 then test1 3.14 elseif cond2 then test2 \"hello world\" else test3 endif");
    let status = ctx.run();
    ctx.unload();
    assert_eq!(status, Status::Ok);
}
