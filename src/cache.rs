// src/cache.rs
//
// Per-user copy of the built runtime library, so linking a program does not
// depend on the cargo target directory still being around.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LinkError, LinkResult};

/// File name cargo gives the runtime's staticlib on this platform.
pub const RUNTIME_LIB_NAME: &str = if cfg!(windows) {
    "coco_runtime.lib"
} else {
    "libcoco_runtime.a"
};

/// `$HOME/.cache/coco` on Linux and macOS, `%LOCALAPPDATA%\coco\cache` on
/// Windows, `<tmp>/coco-cache` elsewhere or when the variable is unset.
pub fn default_cache_dir() -> PathBuf {
    cache_dir_for(env::consts::OS, |key| env::var_os(key))
}

pub(crate) fn cache_dir_for(os: &str, var: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    let dir = match os {
        "linux" | "macos" => var("HOME").map(|home| PathBuf::from(home).join(".cache").join("coco")),
        "windows" => var("LOCALAPPDATA").map(|local| PathBuf::from(local).join("coco").join("cache")),
        _ => None,
    };
    dir.unwrap_or_else(|| env::temp_dir().join("coco-cache"))
}

#[derive(Debug, Clone)]
pub struct RuntimeCache {
    dir: PathBuf,
}

impl RuntimeCache {
    pub fn new() -> LinkResult<Self> {
        Self::at(default_cache_dir())
    }

    /// Uses `dir` as the cache, creating it if needed.
    pub fn at(dir: impl Into<PathBuf>) -> LinkResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(RuntimeCache { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cached_lib(&self) -> PathBuf {
        self.dir.join(RUNTIME_LIB_NAME)
    }

    /// True if the cached copy is missing or older than `source`.
    pub fn is_stale(&self, source: &Path) -> LinkResult<bool> {
        let cached = match fs::metadata(self.cached_lib()) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(true),
            Err(err) => return Err(err.into()),
        };
        let source_modified = fs::metadata(source)?.modified()?;
        Ok(cached.modified()? < source_modified)
    }

    /// Copies `source` into the cache when stale and returns the cached path.
    pub fn install(&self, source: &Path) -> LinkResult<PathBuf> {
        if !source.is_file() {
            return Err(LinkError::MissingRuntime(source.to_path_buf()));
        }

        let cached = self.cached_lib();
        if self.is_stale(source)? {
            fs::copy(source, &cached)?;
            info!("cached runtime library {} -> {}", source.display(), cached.display());
        } else {
            debug!("runtime cache up to date: {}", cached.display());
        }
        Ok(cached)
    }
}
