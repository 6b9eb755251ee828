//! Command line definition

use clap::{Args, Parser, Subcommand};
use folio_animation::Preset;
use folio_core::ColorScheme;
use folio_theme::ThemePreference;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Theme preference and decorative animation tooling for the Folio site")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./folio.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Print the root element attributes for the first paint
    Bootstrap {
        /// Classes already present on the root element
        #[arg(long = "class", value_name = "CLASS")]
        classes: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Run an animation preset headlessly and summarize the last frame
    Animate(AnimateArgs),

    /// List animation presets
    Presets,

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Show the preference, the OS scheme and the resolved scheme
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Set the preference
    Set {
        /// light, dark or system
        preference: ThemePreference,
    },

    /// Advance light, dark, system, light, ...
    Cycle,
}

#[derive(Args, Debug)]
pub struct AnimateArgs {
    /// Preset id (see `folio presets`)
    pub preset: Preset,

    /// Number of frames to render
    #[arg(short, long, default_value_t = 60)]
    pub frames: u64,

    /// Surface width in logical pixels
    #[arg(long)]
    pub width: Option<f32>,

    /// Surface height in logical pixels
    #[arg(long)]
    pub height: Option<f32>,

    /// Device pixel ratio
    #[arg(long)]
    pub dpr: Option<f32>,

    /// Layout seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color scheme for theme-aware presets (default: resolved theme)
    #[arg(long)]
    pub scheme: Option<ColorScheme>,

    /// Drive frames from a real-time ticker at the configured frame rate
    #[arg(long)]
    pub realtime: bool,

    /// Print the last frame's paint commands as JSON
    #[arg(long)]
    pub json: bool,
}
