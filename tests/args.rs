//! The argument-extraction API: `has_param`, `pop_int`, `pop_float`,
//! `pop_string`, `push_bool`.

use xpl::{Context, RegistryBuilder, Status};

fn capture_int(ctx: &mut Context) -> Status {
    match ctx.pop_int() {
        Ok(v) => {
            ctx.userdata_mut::<Vec<i32>>().unwrap().push(v);
            Status::Ok
        }
        Err(status) => status,
    }
}

#[test]
fn pop_int_rejects_trailing_garbage() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("12abc");
    assert_eq!(ctx.pop_int(), Err(Status::ParamTypeError));
}

#[test]
fn pop_float_narrows_to_single_precision() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("3.5");
    assert_eq!(ctx.pop_float(), Ok(3.5_f32));
}

#[test]
fn pop_after_a_comma_sees_no_param() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load(",");
    assert_eq!(ctx.has_param(), Status::NoParam);
}

fn noop(_ctx: &mut Context) -> Status {
    Status::Ok
}

#[test]
fn has_param_before_a_registered_name_is_no_param() {
    let registry = RegistryBuilder::new().register("test3", noop).build();
    let mut ctx = Context::open(&registry);
    ctx.load("test3");
    assert_eq!(ctx.has_param(), Status::NoParam);
}

#[test]
fn push_bool_and_composing_modes_round_trip() {
    let registry = RegistryBuilder::new().register("grab", capture_int).build();
    let mut ctx = Context::open(&registry);
    ctx.set_userdata::<Vec<i32>>(Vec::new());
    ctx.load("grab 42 grab 0x10 grab 010");
    assert_eq!(ctx.run(), Status::Ok);
    assert_eq!(ctx.userdata::<Vec<i32>>().unwrap(), &vec![42, 16, 8]);
}
