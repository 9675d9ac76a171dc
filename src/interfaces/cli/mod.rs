use std::path::PathBuf;

use clap::Parser;

use crate::io::format::crystsym_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted crystsym heading to the `crystsym-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    crystsym_output!("╭─────────────────────────────────────────────────────────────────────────────────────────────────────╮");
    crystsym_output!("│                                                                                                     │");
    crystsym_output!("│    ██████ ██████  ██    ██ ███████ ████████ ███████ ██    ██ ███    ███                             │");
    crystsym_output!("│   ██      ██   ██  ██  ██  ██         ██    ██       ██  ██  ████  ████                             │");
    crystsym_output!("│   ██      ██████    ████   ███████    ██    ███████   ████   ██ ████ ██                             │");
    crystsym_output!("│   ██      ██   ██    ██         ██    ██         ██    ██    ██  ██  ██                             │");
    crystsym_output!("│    ██████ ██   ██    ██    ███████    ██    ███████    ██    ██      ██                             │");
    crystsym_output!("│                                                                                                     │");
    crystsym_output!("│   Crystallographic space-group symmetry                                             {version:>13}   │");
    crystsym_output!("╰─────────────────────────────────────────────────────────────────────────────────────────────────────╯");
    crystsym_output!("");
}

/// Command-line arguments of the `crystsym` binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The YAML configuration file describing the cell and the calculations to be run.
    #[arg(short, long)]
    pub config: PathBuf,

    /// An optional file to which the output is also written.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
