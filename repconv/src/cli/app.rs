use clap::{Args, Parser, Subcommand};
use repconv_core::MismatchPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repconv",
    version,
    about = "Repconv - Convert `> rep` report files to CSV",
    long_about = "Repconv reads report files made of repeated `> rep N` blocks with `** Label` / value line pairs and writes them as comma-separated rows with a single header row."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert repeated blocks to CSV
    #[command(about = "Convert repeated `> rep` blocks into CSV rows")]
    Csv(CsvArgs),

    /// Replace the first header line and pass everything else through
    #[command(about = "Emit the first `** ` header as a plain line and copy all other lines")]
    Structure(StructureArgs),
}

/// Input, output and comment options shared by both converters
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Report file to convert
    #[arg(help = "Path to the report file to convert")]
    pub input: PathBuf,

    /// Write to a file instead of standard output
    #[arg(short, long, help = "Output file (defaults to standard output)")]
    pub output: Option<PathBuf>,

    /// Comment marker character
    #[arg(long, help = "Character that starts a comment running to end of line")]
    pub comment_marker: Option<char>,
}

#[derive(Parser, Debug)]
pub struct CsvArgs {
    #[command(flatten)]
    pub io: InputArgs,

    /// Field separator
    #[arg(short, long, help = "Separator placed between fields (default \", \")")]
    pub delimiter: Option<String>,

    /// Mismatch handling
    #[arg(long, help = "Handling of blocks that differ from the header: strict, pad or loose")]
    pub on_mismatch: Option<MismatchPolicy>,
}

#[derive(Parser, Debug)]
pub struct StructureArgs {
    #[command(flatten)]
    pub io: InputArgs,
}
