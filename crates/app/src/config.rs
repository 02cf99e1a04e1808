//! Command-line configuration for the huffpack tool.
//!
//! The surface is deliberately small: a command, an input file, and an
//! optional output file. Defaults for the output are derived per command
//! (`encode` from the input name, `decode` from the archive header).

use std::path::{Path, PathBuf};

/// Archive operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encode,
    Decode,
    Info,
}

/// Parsed invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    /// File to read: raw bytes for `encode`, an archive otherwise
    pub input_file: PathBuf,

    /// Explicit output path; `None` means derive the default
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// excluded).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.iter().any(|arg| arg == "--help" || arg == "-h") {
            print_help();
            std::process::exit(0);
        }

        if args.len() < 2 {
            return Err("expected <encode|decode|info> <inputFile> [outputFile]".to_string());
        }
        if args.len() > 3 {
            return Err(format!("unexpected argument: {}", args[3]));
        }

        let command = match args[0].as_str() {
            "encode" => Command::Encode,
            "decode" => Command::Decode,
            "info" => Command::Info,
            other => return Err(format!("unknown command: {other}")),
        };

        Ok(Config {
            command,
            input_file: PathBuf::from(&args[1]),
            output_file: args.get(2).map(PathBuf::from),
        })
    }

    /// Default archive name for `encode`: the input's stem plus `.huff`,
    /// alongside the input.
    pub fn default_archive_name(input: &Path) -> PathBuf {
        let mut name = input
            .file_stem()
            .unwrap_or_else(|| input.as_os_str())
            .to_os_string();
        name.push(".huff");
        input.with_file_name(name)
    }
}

fn print_help() {
    println!("huffpack: static Huffman file archiver");
    println!();
    println!("USAGE:");
    println!("    huffpack <COMMAND> <inputFile> [outputFile]");
    println!();
    println!("COMMANDS:");
    println!("    encode    Compress inputFile into a .huff archive");
    println!("              (default output: input stem + .huff)");
    println!("    decode    Recover the original file from an archive");
    println!("              (default output: the name recorded in the archive)");
    println!("    info      Print archive statistics and the code table");
    println!();
    println!("OPTIONS:");
    println!("    --help, -h    Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack encode report.txt            # writes report.huff");
    println!("    huffpack decode report.huff           # writes report.txt");
    println!("    huffpack info report.huff");
    println!();
}
