// src/bin/coco_link.rs
//
// Links a compiled coco program (.o or .ll) against the print runtime.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coco::abi::{c_prototype, RuntimeFn};
use coco::cache::RuntimeCache;
use coco::error::LinkResult;
use coco::link::{default_output, locate_runtime_lib, Linker};

#[derive(Parser, Debug)]
#[command(name = "coco-link", version, about = "Link compiled coco programs against the print runtime")]
struct Cli {
    /// Object file (.o) or LLVM IR file (.ll) emitted by the compiler
    #[arg(required_unless_present = "print_abi")]
    input: Option<PathBuf>,

    /// Executable to produce (defaults to the input path without extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Runtime static library to link (defaults to the one in the cargo target dir)
    #[arg(long, env = "COCO_RUNTIME_LIB")]
    runtime_lib: Option<PathBuf>,

    /// Linker executable
    #[arg(long, env = "COCO_LINKER", default_value = "clang")]
    linker: String,

    /// Link the library in place instead of going through the runtime cache
    #[arg(long)]
    no_cache: bool,

    /// Print the C prototypes of the runtime entry points and exit
    #[arg(long)]
    print_abi: bool,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, input: &Path) -> LinkResult<PathBuf> {
    let runtime_lib = match &cli.runtime_lib {
        Some(path) => path.clone(),
        None => locate_runtime_lib(None)?,
    };
    let runtime_lib = if cli.no_cache {
        runtime_lib
    } else {
        RuntimeCache::new()?.install(&runtime_lib)?
    };

    let output = cli.output.clone().unwrap_or_else(|| default_output(input));
    Linker::new(cli.linker.as_str()).link(input, &runtime_lib, &output)?;
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.print_abi {
        for func in RuntimeFn::ALL {
            println!("{}", c_prototype(func));
        }
        return ExitCode::SUCCESS;
    }

    let Some(input) = cli.input.as_deref() else {
        eprintln!("error: no input file");
        return ExitCode::FAILURE;
    };

    match run(&cli, input) {
        Ok(output) => {
            println!("Successfully linked executable: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
