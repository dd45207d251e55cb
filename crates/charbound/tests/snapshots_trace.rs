#![expect(missing_docs)]

use core::fmt::Write;

use charbound::{BoundedReader, CharBuffer, CharStream, StrStream};

/// Drives a bounded reader through a fixed script and renders each step with
/// the budget left afterwards.
fn render_session(text: &str, bound: i64) -> String {
    let mut reader = BoundedReader::new(StrStream::new(text), bound);
    let mut out = String::new();
    let mut buf = ['\0'; 8];

    let c = reader.read_char().unwrap();
    writeln!(out, "read_char -> {c:?} (remaining {})", reader.remaining()).unwrap();

    reader.mark(16).unwrap();
    writeln!(out, "mark(16) (remaining {})", reader.remaining()).unwrap();

    let n = reader.read_into(&mut buf, 0, 8).unwrap();
    let got: String = buf[..n.unwrap_or(0)].iter().collect();
    writeln!(out, "read_into(8) -> {n:?} {got:?} (remaining {})", reader.remaining()).unwrap();

    let c = reader.read_char().unwrap();
    writeln!(out, "read_char -> {c:?} (remaining {})", reader.remaining()).unwrap();

    let n = reader.read_into(&mut buf, 0, 0).unwrap();
    writeln!(out, "read_into(0) -> {n:?} (remaining {})", reader.remaining()).unwrap();

    reader.reset().unwrap();
    writeln!(out, "reset (remaining {})", reader.remaining()).unwrap();

    let skipped = reader.skip(2).unwrap();
    writeln!(out, "skip(2) -> {skipped} (remaining {})", reader.remaining()).unwrap();

    let mut dst = CharBuffer::new(8);
    let n = reader.read_buffer(&mut dst).unwrap();
    writeln!(
        out,
        "read_buffer(8) -> {n:?} {:?} (remaining {})",
        dst.filled_string(),
        reader.remaining()
    )
    .unwrap();

    reader.close().unwrap();
    let err = reader.mark(1).unwrap_err();
    writeln!(out, "mark after close -> {err}").unwrap();
    out
}

#[test]
fn snapshot_bounded_session() {
    insta::assert_snapshot!(render_session("hello, world", 6), @r#"
    read_char -> Some('h') (remaining 5)
    mark(16) (remaining 5)
    read_into(8) -> Some(5) "ello," (remaining 0)
    read_char -> None (remaining 0)
    read_into(0) -> Some(0) (remaining 0)
    reset (remaining 5)
    skip(2) -> 2 (remaining 3)
    read_buffer(8) -> Some(3) "lo," (remaining 0)
    mark after close -> Stream closed
    "#);
}

#[test]
fn snapshot_negative_bound_session() {
    insta::assert_snapshot!(render_session("abc", -3), @r#"
    read_char -> None (remaining -3)
    mark(16) (remaining -3)
    read_into(8) -> None "" (remaining -3)
    read_char -> None (remaining -3)
    read_into(0) -> Some(0) (remaining -3)
    reset (remaining -3)
    skip(2) -> 0 (remaining -3)
    read_buffer(8) -> None "" (remaining -3)
    mark after close -> Stream closed
    "#);
}
