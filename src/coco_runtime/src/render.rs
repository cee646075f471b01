// src/coco_runtime/src/render.rs
//
// Text for each printable primitive, plus the single line writer every
// entry point goes through. Nothing in here touches the real stdout.

use std::io::{self, Write};

use crate::general::format_general;
use crate::tag::BoolTag;

pub fn render_integer(value: i64, out: &mut Vec<u8>) {
    let mut buf = itoa::Buffer::new();
    out.extend_from_slice(buf.format(value).as_bytes());
}

pub fn render_float(value: f64, out: &mut Vec<u8>) {
    format_general(value, out);
}

pub fn render_boolean(tag: i64, out: &mut Vec<u8>) {
    match BoolTag::from_raw(tag) {
        BoolTag::False => out.extend_from_slice(b"false"),
        BoolTag::True => out.extend_from_slice(b"true"),
        // Malformed tag from the caller: print it like an integer instead of failing
        BoolTag::Other(raw) => render_integer(raw, out),
    }
}

/// Renders one value, terminates it with '\n' and hands the whole line to
/// `out` in a single `write_all`, then flushes.
pub fn write_line<W, F>(out: &mut W, render: F) -> io::Result<()>
where
    W: Write + ?Sized,
    F: FnOnce(&mut Vec<u8>),
{
    let mut line = Vec::with_capacity(32);
    render(&mut line);
    line.push(b'\n');
    out.write_all(&line)?;
    out.flush()
}
