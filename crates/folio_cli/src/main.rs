//! Folio CLI
//!
//! Inspect and change the persisted theme preference, print the first-paint
//! root attributes, run animation presets headlessly, and show the
//! effective configuration.

mod cli;
mod config;
mod preview;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, ThemeAction};
use config::FolioConfig;
use folio_animation::Preset;
use folio_core::ColorScheme;
use folio_theme::{
    apply_initial_theme, detect_system_color_scheme, FileStore, RootStyle, SystemSchemeSignal,
    ThemeResolver,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FolioConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Theme { action } => run_theme(&config, action),
        Command::Bootstrap { classes, json } => run_bootstrap(&config, classes, json),
        Command::Animate(args) => preview::run(&config, args),
        Command::Presets => {
            for preset in Preset::all() {
                let aware = if preset.is_theme_aware() {
                    " (theme-aware)"
                } else {
                    ""
                };
                println!("{:<16} {}{}", preset.id(), preset.display_name(), aware);
            }
            Ok(())
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// OS scheme from the config override, else detected from the desktop
fn os_scheme(config: &FolioConfig) -> ColorScheme {
    config
        .theme
        .scheme_override
        .unwrap_or_else(detect_system_color_scheme)
}

fn resolver(config: &FolioConfig) -> ThemeResolver {
    let store = FileStore::new(config.theme.resolved_store_path());
    ThemeResolver::with_storage_key(
        config.theme.storage_key.clone(),
        Arc::new(store),
        Arc::new(SystemSchemeSignal::new(os_scheme(config))),
        Arc::new(RootStyle::new()),
    )
}

fn run_theme(config: &FolioConfig, action: ThemeAction) -> Result<()> {
    let resolver = resolver(config);

    match action {
        ThemeAction::Show { json } => {
            let store_path = config.theme.resolved_store_path();
            if json {
                let value = serde_json::json!({
                    "preference": resolver.get_preference(),
                    "os_scheme": os_scheme(config),
                    "resolved": resolver.resolved(),
                    "store": store_path,
                    "storage_key": resolver.storage_key(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("preference: {}", resolver.get_preference());
                println!("os scheme:  {}", os_scheme(config));
                println!("resolved:   {}", resolver.resolved());
                println!("store:      {}", store_path.display());
            }
        }
        ThemeAction::Set { preference } => {
            resolver.set_preference(preference);
            println!(
                "Theme preference set to {} (resolved: {})",
                preference,
                resolver.resolved()
            );
        }
        ThemeAction::Cycle => {
            let preference = resolver.cycle();
            println!(
                "Theme preference set to {} (resolved: {})",
                preference,
                resolver.resolved()
            );
        }
    }

    Ok(())
}

fn run_bootstrap(config: &FolioConfig, classes: Vec<String>, json: bool) -> Result<()> {
    let store = FileStore::new(config.theme.resolved_store_path());
    let root = RootStyle::with_classes(classes);
    let initial = apply_initial_theme(&store, &config.theme.storage_key, os_scheme(config), &root);

    if json {
        let value = serde_json::json!({
            "initial": initial,
            "html_attributes": root.html_attributes(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("<html {}>", root.html_attributes());
    }
    Ok(())
}
