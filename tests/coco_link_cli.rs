use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn print_abi_lists_runtime_prototypes() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("coco-link")?;
    cmd.arg("--print-abi");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("void __coco_print_int(int64_t value);"))
        .stdout(predicate::str::contains("void __coco_print_float(double value);"))
        .stdout(predicate::str::contains("void __coco_print_bool(int64_t value);"));
    Ok(())
}

#[test]
fn rejects_unsupported_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let lib = dir.path().join("libcoco_runtime.a");
    fs::write(&lib, b"lib")?;

    let mut cmd = Command::cargo_bin("coco-link")?;
    cmd.arg(dir.path().join("prog.c"))
        .arg("--runtime-lib")
        .arg(&lib)
        .arg("--no-cache");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported linker input"));
    Ok(())
}

#[test]
fn reports_missing_runtime_library() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("prog.o");
    fs::write(&input, b"obj")?;

    let mut cmd = Command::cargo_bin("coco-link")?;
    cmd.arg(&input)
        .arg("--runtime-lib")
        .arg(dir.path().join("missing.a"))
        .arg("--no-cache");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("runtime library not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn links_through_the_cache_with_configured_linker() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("prog.ll");
    let lib = dir.path().join("built.a");
    fs::write(&input, b"; ir")?;
    fs::write(&lib, b"lib")?;
    let home = dir.path().join("home");

    let mut cmd = Command::cargo_bin("coco-link")?;
    cmd.env("HOME", &home)
        .env("COCO_RUNTIME_LIB", &lib)
        .env("COCO_LINKER", "true")
        .arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully linked executable"))
        .stdout(predicate::str::contains("prog"));

    if cfg!(any(target_os = "linux", target_os = "macos")) {
        assert!(home.join(".cache/coco/libcoco_runtime.a").is_file());
    }
    Ok(())
}
