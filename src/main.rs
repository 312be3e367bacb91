#![allow(non_snake_case)]

mod app;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::{default_config_path, ShowcaseConfig, ThemeMode};

/// What the window shows, set once from the command line
pub struct Showcase {
    pub config: ShowcaseConfig,
    pub theme: ThemeMode,
}

static SHOWCASE: OnceLock<Showcase> = OnceLock::new();

/// Get the showcase (set from command line, or the built-in one)
pub fn showcase() -> &'static Showcase {
    SHOWCASE.get_or_init(|| Showcase {
        config: ShowcaseConfig::built_in(),
        theme: ThemeMode::default(),
    })
}

/// Y2K Tech - component showcase
#[derive(Parser, Debug)]
#[command(name = "y2k-showcase")]
#[command(about = "Y2K Tech - Announcement banners and decorative layers")]
struct Args {
    /// Showcase file (JSON). Defaults to <config dir>/y2k-showcase/showcase.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page background theme
    #[arg(short, long, value_enum, default_value_t = ThemeMode::Light)]
    theme: ThemeMode,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    let default_path = default_config_path();
    let config = match ShowcaseConfig::resolve(args.config.as_deref(), default_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Starting showcase '{}' with {} banner(s), {:?} theme",
        config.title,
        config.banners.len(),
        args.theme
    );

    let title = format!("Y2K Tech - {}", config.title);
    let _ = SHOWCASE.set(Showcase {
        config,
        theme: args.theme,
    });

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    ExitCode::SUCCESS
}
