//! huffpack: command dispatch and file I/O.
//!
//! The core codec operates on in-memory buffers; this binary owns reading
//! and writing the named files. Every output is fully built in memory
//! before the single write, so a failed operation never leaves a partial
//! file behind.

use std::path::PathBuf;
use std::process::ExitCode;

use huffpack_core::archive;
use huffpack_core::stats::ArchiveStats;

mod config;
use config::{Command, Config};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: huffpack <encode|decode|info> <inputFile> [outputFile]");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> huffpack_core::Result<()> {
    match config.command {
        Command::Encode => {
            let data = std::fs::read(&config.input_file)?;
            let file_name = original_file_name(&config.input_file);

            let bytes = archive::encode_archive(&file_name, &data)?;
            let output = config
                .output_file
                .clone()
                .unwrap_or_else(|| Config::default_archive_name(&config.input_file));
            std::fs::write(&output, &bytes)?;

            println!(
                "Encoded {} -> {} ({} -> {} bytes)",
                config.input_file.display(),
                output.display(),
                data.len(),
                bytes.len()
            );
        }
        Command::Decode => {
            let bytes = std::fs::read(&config.input_file)?;
            let decoded = archive::decode_archive(&bytes)?;

            let output = config
                .output_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(&decoded.file_name));
            std::fs::write(&output, &decoded.data)?;

            println!(
                "Decoded {} -> {} ({} bytes)",
                config.input_file.display(),
                output.display(),
                decoded.data.len()
            );
        }
        Command::Info => {
            let bytes = std::fs::read(&config.input_file)?;
            let stats = ArchiveStats::from_archive(&bytes)?;
            stats.print_summary();
        }
    }
    Ok(())
}

/// Name recorded in the archive header: the input's final component.
fn original_file_name(input: &std::path::Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string())
}
