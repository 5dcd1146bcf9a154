//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Report hardcoded strings (default when no command is given)
//! - `generate`: Generate a translation file from hardcoded strings
//! - `extract`: Collect keys used by translation calls
//! - `complete`: Extract and generate in one translation file
//! - `validate`: Compare keys used in code with a translation file
//! - `check-duplicates`: Find repeated keys and values in a translation file
//! - `find`: Locate a string or key in the source
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default translation file, relative to the root.
pub const DEFAULT_TRANSLATION_FILE: &str = "translations.json";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Options for `scan` when no command is given.
    #[command(flatten)]
    pub scan: ScanArgs,
}

impl Arguments {
    /// The command to run, `scan` when none was given.
    pub fn into_command(self) -> (CommonArgs, Command) {
        let command = self.command.unwrap_or(Command::Scan(self.scan));
        (self.common, command)
    }
}

/// Arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root to scan
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (default: .glossarc.json searched upward from the root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Write the scan report as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Exit with status 1 when hardcoded strings are found
    #[arg(long)]
    pub fail_on_issues: bool,
}

/// Where a generated translation file goes.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Translation file to write [default: <root>/translations.json]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also write the flat key map (key, value, source, locations)
    #[arg(long)]
    pub keymap: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Use bare keys without file-derived namespaces
    #[arg(long)]
    pub flat: bool,

    /// Existing translation file to merge into; its values are kept
    #[arg(long)]
    pub baseline: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
pub struct BaselineArgs {
    /// Translation file to check [default: <root>/translations.json]
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Exit with status 1 when issues are found
    #[arg(long)]
    pub fail_on_issues: bool,
}

#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Text or translation key to look for
    pub query: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Report hardcoded strings in JSX/TSX files
    Scan(ScanArgs),
    /// Generate a translation file from hardcoded strings
    Generate(GenerateArgs),
    /// Collect keys used by translation calls into a translation file
    Extract(ExtractArgs),
    /// Extract used keys and generate keys for hardcoded strings together
    Complete(GenerateArgs),
    /// Report keys missing from or unused in a translation file
    Validate(BaselineArgs),
    /// Report repeated keys and repeated values in a translation file
    CheckDuplicates(BaselineArgs),
    /// Find where a string or key is used
    Find(FindArgs),
    /// Create a .glossarc.json configuration file in the root
    Init,
}
