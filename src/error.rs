// src/error.rs

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from locating, caching and linking the runtime library.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("runtime library not found at {}; build it with `cargo build -p coco_runtime`", .0.display())]
    MissingRuntime(PathBuf),

    #[error("unsupported linker input '{}': expected a .o or .ll file", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("failed to run linker '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("linker '{program}' exited with {status}: {stderr}")]
    LinkerFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type LinkResult<T> = Result<T, LinkError>;
