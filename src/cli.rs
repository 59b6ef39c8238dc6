use clap::{Args, Parser, Subcommand, ValueEnum};
use oxirow::logging::LogFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "oxirow", version, about = "Inspect keyed rows stored as JSON")]
pub struct Cli {
    /// TOML configuration file; missing files fall back to defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every row as `key: [fields]`
    Show(ShowArgs),
    /// Print `key<TAB>hash_code` for every row
    Hash(InputArgs),
    /// Compare two rows by position: key ordering and full equality
    Compare(CompareArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON array of `{"key": ..., "fields": [...]}` objects
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Sort rows by key (stable)
    #[arg(long)]
    pub sort: bool,

    /// Append each row's hash code
    #[arg(long)]
    pub hash: bool,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Index of the left row
    pub left: usize,

    /// Index of the right row
    pub right: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
