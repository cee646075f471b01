// src/coco_runtime/src/lib.rs
//
// Print runtime linked into every compiled coco program. Generated code calls
// the three `__coco_print_*` symbols below; each call writes one
// newline-terminated line to stdout.
//
// Output discipline: every call holds the stdout lock for a single write of
// the complete line and flushes before returning, so lines from concurrent
// callers never interleave and nothing waits in a buffer at process exit.
// Write failures (closed stdout, broken pipe) are dropped; callers never see
// them.

use std::io::{self, Write};

pub mod abi;
pub mod general;
pub mod render;
pub mod tag;

pub use abi::{AbiParam, RuntimeFn};
pub use tag::BoolTag;

use render::{render_boolean, render_float, render_integer, write_line};

// --- Safe API ---

pub fn print_integer(value: i64) {
    emit(|line| render_integer(value, line));
}

pub fn print_float(value: f64) {
    emit(|line| render_float(value, line));
}

/// Prints `false`/`true` for tags 0/1 and the integer itself for any other tag.
pub fn print_boolean(value: i64) {
    emit(|line| render_boolean(value, line));
}

fn emit(render: impl FnOnce(&mut Vec<u8>)) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    emit_to(&mut lock, render);
}

fn emit_to<W: Write + ?Sized>(out: &mut W, render: impl FnOnce(&mut Vec<u8>)) {
    if let Err(err) = write_line(out, render) {
        tracing::debug!(error = %err, "runtime output line dropped");
    }
}

// --- C ABI ---
// Names must stay in sync with `RuntimeFn::symbol`.

#[no_mangle]
pub extern "C" fn __coco_print_int(value: i64) {
    print_integer(value);
}

#[no_mangle]
pub extern "C" fn __coco_print_float(value: f64) {
    print_float(value);
}

#[no_mangle]
pub extern "C" fn __coco_print_bool(value: i64) {
    print_boolean(value);
}
