#![allow(non_snake_case)]

mod app;
mod settings;

use affirmations_core::resources::{validate_bundle, BundledAssets, BundledStrings, Locale};
use affirmations_ui::Theme;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::settings::{AppData, AppSettings};

/// Color theme selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::Dark => Theme::dark(),
        }
    }
}

/// Affirmations - a scrollable list of affirmation cards
#[derive(Parser, Debug)]
#[command(name = "affirmations-desktop")]
#[command(about = "Affirmations - a scrollable list of affirmation cards")]
struct Args {
    /// UI language as a BCP 47 tag or POSIX locale (defaults to $LANG)
    #[arg(short, long)]
    locale: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Validate bundled strings and artwork for every locale, then exit
    #[arg(long)]
    check_resources: bool,
}

impl Args {
    fn settings(&self) -> AppSettings {
        let tag = self
            .locale
            .clone()
            .or_else(|| std::env::var("LANG").ok())
            .unwrap_or_default();

        AppSettings {
            locale: Locale::parse(&tag),
            theme: self.theme.into(),
            window_width: self.width,
            window_height: self.height,
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Report every unresolved reference; fails if there is at least one.
fn check_resources() -> anyhow::Result<()> {
    let strings = BundledStrings::load()?;
    let failures = validate_bundle(&strings, &BundledAssets::new());

    let locales: Vec<String> = strings.locales().iter().map(Locale::to_string).collect();
    println!("Checked locales: {}", locales.join(", "));

    if failures.is_empty() {
        println!("All resources resolved");
        return Ok(());
    }
    for failure in &failures {
        println!("  {}", failure);
    }
    anyhow::bail!("{} unresolved resource reference(s)", failures.len())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    if args.check_resources {
        return check_resources();
    }

    let settings = args.settings();
    let data = AppData::load(&settings).map_err(|e| {
        tracing::error!("Failed to resolve affirmations: {}", e);
        e
    })?;

    tracing::info!(
        "Starting '{}' with locale '{}' ({} cards)",
        data.title,
        data.locale,
        data.affirmations.len()
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&data.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                settings.window_width,
                settings.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(data)
        .launch(app::App);

    Ok(())
}
