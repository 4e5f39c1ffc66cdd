//! The comment skipper and whitespace handling, exercised through the
//! public surface (`skip_comment`, and indirectly via `pop_string`/`run`).

use xpl::{Context, RegistryBuilder, Status};

#[test]
fn skip_comment_consumes_a_quoted_span() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("'a comment'rest");
    assert_eq!(ctx.skip_comment(), Status::Ok);
    assert_eq!(ctx.cursor(), "'a comment'".len());
}

#[test]
fn skip_comment_reports_no_comment_when_absent() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("no comment here");
    assert_eq!(ctx.skip_comment(), Status::NoComment);
    assert_eq!(ctx.cursor(), 0);
}

#[test]
fn comments_may_separate_dispatched_callbacks() {
    fn noop(_ctx: &mut Context) -> Status {
        Status::Ok
    }
    let registry = RegistryBuilder::new().register("noop", noop).build();
    let mut ctx = Context::open(&registry);
    ctx.load("'leading comment' noop 'trailing comment'");
    assert_eq!(ctx.run(), Status::Ok);
    assert!(ctx.at_end());
}

#[test]
fn barewords_are_delimited_by_the_separator_set() {
    let registry = RegistryBuilder::new().build();
    let mut ctx = Context::open(&registry);
    ctx.load("bareword!rest");
    assert_eq!(ctx.pop_string().unwrap(), "bareword");
    assert_eq!(&ctx.text().unwrap()[ctx.cursor()..], "!rest");
}
