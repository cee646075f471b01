// src/lib.rs
//
// Caller-side support for the coco print runtime: what generated code has to
// declare, where the built runtime library lives, and how to link a compiled
// program against it.

pub mod abi;
pub mod cache;
#[cfg(feature = "llvm")]
pub mod declare;
pub mod error;
pub mod link;

#[cfg(test)]
mod tests;
