//! CLI argument parsing for polylex.

use std::path::PathBuf;

use clap::Parser;

use crate::render::Format;

/// polylex - tokenize C, Java and C++ source files into a token table
#[derive(Parser, Debug)]
#[command(name = "polylex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source files to tokenize; the language follows the suffix (.c, .java, .cpp)
    #[arg(required_unless_present = "show_config")]
    pub files: Vec<PathBuf>,

    /// Force a language by extension instead of using the file suffix
    #[arg(short, long, value_name = "EXT")]
    pub lang: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (no file headings, errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
