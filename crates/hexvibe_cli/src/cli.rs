//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Color palette generator with harmonies, history and AI palettes
#[derive(Parser)]
#[command(name = "hexvibe", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Data directory (default: $HEXVIBE_DATA_DIR or ~/.hexvibe)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print random colors
    Random {
        /// How many colors
        #[arg(short = 'n', long = "count", default_value_t = hexvibe_constant::app::PALETTE_SIZE)]
        count: usize,
    },
    /// Show a color as hex, rgb, hsl, luma and contrast text color
    Convert {
        /// Hex color, e.g. #FF5733
        hex: String,
    },
    /// Print the legible text color (#000000 or #FFFFFF) for a background
    Contrast {
        hex: String,
    },
    /// Derive harmony colors from a base color
    Harmony {
        hex: String,
        /// analogous, complementary, triadic or monochromatic
        rule: String,
    },
    /// Ask an AI provider for a palette matching a description
    Ai {
        /// Free-text description, e.g. "foggy harbor at dawn"
        prompt: String,
        /// Provider to use (gemini, zai, openai). Uses HEXVIBE_PROVIDER if not set.
        #[arg(long)]
        provider: Option<String>,
        /// Model to use. Uses HEXVIBE_MODEL if not set.
        #[arg(long)]
        model: Option<String>,
        /// Do not add the result to history
        #[arg(long)]
        no_save: bool,
    },
    /// Save a palette to history
    Save {
        #[arg(required = true, num_args = 1..)]
        colors: Vec<String>,
        /// Palette name (default: "Palette N")
        #[arg(long)]
        name: Option<String>,
    },
    /// Manage saved palettes
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Export a palette as JSON
    Export {
        #[arg(required = true, num_args = 1..)]
        colors: Vec<String>,
        /// Palette name (default: "HexVibe Palette YYYY-MM-DD")
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        target: ExportTarget,
    },
    /// Show or set the persisted appearance
    Theme {
        /// light or dark
        appearance: Option<String>,
    },
    /// Inspect and test AI providers
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
    /// Configure HexVibe settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Run the interactive TUI
    Tui {
        /// Provider to use (gemini, zai, openai). Uses HEXVIBE_PROVIDER if not set.
        #[arg(long)]
        provider: Option<String>,
        /// Model to use. Uses HEXVIBE_MODEL if not set.
        #[arg(long)]
        model: Option<String>,
        /// Keep history and theme in memory only
        #[arg(long)]
        ephemeral: bool,
    },
}

/// Where an export goes.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ExportTarget {
    /// Directory for hexvibe-palette.json (default: current directory)
    #[arg(long, value_name = "DIR", conflicts_with = "stdout")]
    pub out: Option<PathBuf>,
    /// Print the JSON instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved palettes, newest first
    List,
    /// Show one saved palette
    Show {
        /// Palette id (a unique prefix is enough)
        id: String,
    },
    /// Delete a saved palette
    Delete {
        id: String,
    },
    /// Export a saved palette as JSON
    Export {
        id: String,
        #[command(flatten)]
        target: ExportTarget,
    },
}

#[derive(Subcommand)]
pub enum ProvidersAction {
    /// List providers and whether their API key is set
    List,
    /// List models a provider offers
    Models {
        /// Provider ID (gemini, zai, openai)
        provider: String,
    },
    /// Test connectivity to a provider
    Test {
        provider: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Store an API key for an AI provider
    Api {
        /// Provider ID (gemini, zai, openai). Prompts if omitted.
        #[arg(long)]
        provider: Option<String>,
    },
    /// Show stored configuration (keys masked)
    Show,
}
