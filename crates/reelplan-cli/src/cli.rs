//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "reelplan")]
#[command(about = "Blueprint two 30s UGC videos from a creative brief", long_about = None)]
pub struct Cli {
    /// Directory holding settings.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub settings_dir: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the launch and retarget storyboards
    Generate {
        #[command(flatten)]
        brief: BriefArgs,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Skip the loading delay
        #[arg(long)]
        no_delay: bool,
    },

    /// List trend archetypes and their storyboard hints
    Trends,

    /// Check whether a brief is complete enough to generate
    Validate {
        #[command(flatten)]
        brief: BriefArgs,
    },

    /// Inspect or reset persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Print the effective settings as JSON
    Show,
    /// Delete the settings file and print the defaults
    Reset,
    /// Print the settings file location
    Path,
}

/// Brief fields; flags override values loaded from `--brief`
#[derive(Args, Debug, Clone, Default)]
pub struct BriefArgs {
    /// JSON brief file (camelCase field names)
    #[arg(long = "brief", value_name = "FILE")]
    pub brief_file: Option<String>,

    /// Brand / project
    #[arg(long)]
    pub brand: Option<String>,

    /// Hero product / offer
    #[arg(long)]
    pub product: Option<String>,

    /// Why it pops
    #[arg(long)]
    pub differentiator: Option<String>,

    /// Target viewer
    #[arg(long)]
    pub audience: Option<String>,

    /// Creative tone
    #[arg(long)]
    pub tone: Option<String>,

    /// Trend archetype label (see `reelplan trends`)
    #[arg(long)]
    pub trend: Option<String>,

    /// Offer / urgency line
    #[arg(long)]
    pub offer: Option<String>,

    /// On-screen platform handle, e.g. @neonfuelenergy
    #[arg(long = "handle")]
    pub platform_handle: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parses a configured format name, defaulting to text
    pub fn from_setting(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
