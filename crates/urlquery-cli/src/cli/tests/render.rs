use crate::cli::commands::{parse_query, render_decode, render_get};
use urlquery_core::QueryParams;

#[test]
fn render_decode_lines_in_order() {
    let params: QueryParams = "foo=1&baz=2&foo=3&flag".parse().unwrap();
    assert_eq!(render_decode(&params), "foo\t1\nbaz\t2\nfoo\t3\nflag\t\n");
}

#[test]
fn render_decode_empty() {
    let params: QueryParams = "?".parse().unwrap();
    assert_eq!(render_decode(&params), "");
}

#[test]
fn render_get_first_and_all() {
    let params: QueryParams = "foo=1&baz=2&foo=3".parse().unwrap();
    assert_eq!(render_get(&params, "foo", false), "1\n");
    assert_eq!(render_get(&params, "foo", true), "1\n3\n");
    assert_eq!(render_get(&params, "nope", false), "\n");
    assert_eq!(render_get(&params, "nope", true), "");
}

#[test]
fn parse_query_lenient_keeps_partial_result() {
    let params = parse_query("a=1&b=%zz", false).unwrap();
    assert_eq!(params.encode(), "a=1");
}

#[test]
fn parse_query_strict_fails() {
    let err = parse_query("a=1&b=%zz", true).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("undecodable"));
    assert!(msg.contains("%zz"));
}
