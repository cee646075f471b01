// src/link.rs
//
// Links compiler output against the runtime staticlib with an external
// linker (clang by default).

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::cache::RUNTIME_LIB_NAME;
use crate::error::{LinkError, LinkResult};

/// Cargo profile directory matching the current build.
pub fn runtime_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

/// Finds the runtime staticlib under `<target_dir>/<profile>/`. Without an
/// explicit directory, `CARGO_TARGET_DIR` is used, then `./target`.
pub fn locate_runtime_lib(target_dir: Option<&Path>) -> LinkResult<PathBuf> {
    let target_dir = match target_dir {
        Some(dir) => dir.to_path_buf(),
        None => env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("target")),
    };
    let lib = target_dir.join(runtime_profile()).join(RUNTIME_LIB_NAME);

    if lib.is_file() {
        debug!("found runtime library at {}", lib.display());
        Ok(lib)
    } else {
        Err(LinkError::MissingRuntime(lib))
    }
}

/// `prog.ll` -> `prog`, `out/prog.o` -> `out/prog`.
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension("")
}

// System libraries a Rust staticlib pulls in when linked from a non-Rust main
fn native_libs() -> &'static [&'static str] {
    if cfg!(target_os = "linux") {
        &["-lgcc_s", "-lutil", "-lrt", "-lpthread", "-lm", "-ldl", "-lc"]
    } else if cfg!(target_os = "macos") {
        &["-lSystem", "-lc", "-lm"]
    } else {
        &[]
    }
}

pub(crate) fn check_input(input: &Path) -> LinkResult<()> {
    match input.extension().and_then(OsStr::to_str) {
        Some("o") | Some("ll") => Ok(()),
        _ => Err(LinkError::UnsupportedInput(input.to_path_buf())),
    }
}

#[derive(Debug, Clone)]
pub struct Linker {
    program: String,
    extra_args: Vec<String>,
}

impl Default for Linker {
    fn default() -> Self {
        Linker::new("clang")
    }
}

impl Linker {
    pub fn new(program: impl Into<String>) -> Self {
        Linker {
            program: program.into(),
            extra_args: native_libs().iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// `<program> <input> <runtime_lib> -o <output> <extra args...>`
    pub fn command(&self, input: &Path, runtime_lib: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(input)
            .arg(runtime_lib)
            .arg("-o")
            .arg(output)
            .args(&self.extra_args);
        cmd
    }

    pub fn link(&self, input: &Path, runtime_lib: &Path, output: &Path) -> LinkResult<()> {
        check_input(input)?;
        if !runtime_lib.is_file() {
            return Err(LinkError::MissingRuntime(runtime_lib.to_path_buf()));
        }

        info!(
            "linking {} with {} using {}",
            input.display(),
            runtime_lib.display(),
            self.program
        );
        let result = self
            .command(input, runtime_lib, output)
            .output()
            .map_err(|source| LinkError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(LinkError::LinkerFailed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        info!("linked executable {}", output.display());
        Ok(())
    }
}
