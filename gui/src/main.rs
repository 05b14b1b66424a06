mod app;
mod worker;

use app::KamisadoApp;
use clap::Parser;
use eframe::egui::{self, ViewportBuilder};
use kamisado_client::{HttpGameService, TileGeometry};
use log::LevelFilter;
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::{
    error::Error,
    fs::{self, File},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

#[derive(Parser, Debug)]
struct Args {
    /// TOML config file.
    config: Option<PathBuf>,
    /// Base address of the game server.
    #[arg(long)]
    server: Option<String>,
    /// Board tile size in pixels.
    #[arg(long)]
    tile_size: Option<f32>,
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Config {
    server: Option<String>,
    tile_size: Option<f32>,
    log: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
struct Settings {
    server: String,
    tile_size: f32,
    log: Option<PathBuf>,
}

impl Settings {
    fn resolve(args: &Args, config: Config, config_dir: &Path) -> Result<Self, Box<dyn Error>> {
        let tile_size = args
            .tile_size
            .or(config.tile_size)
            .unwrap_or(TileGeometry::DEFAULT_TILE_SIZE);
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(format!("Invalid tile size {tile_size}").into());
        }
        Ok(Self {
            server: args
                .server
                .clone()
                .or(config.server)
                .unwrap_or_else(|| HttpGameService::DEFAULT_BASE_URL.to_owned()),
            tile_size,
            log: config.log.map(|log| config_dir.join(log)),
        })
    }
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let (config, config_dir) = match &args.config {
        Some(path) => {
            let config_text = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&config_text)?;
            let config_dir = path.parent().unwrap_or(Path::new("")).to_owned();
            (config, config_dir)
        }
        None => (Config::default(), PathBuf::new()),
    };
    let settings = Settings::resolve(&args, config, &config_dir)?;
    init_logging(&settings, args.verbose)?;

    log::info!("game server at {}", settings.server);
    let service = Arc::new(HttpGameService::new(&settings.server)?);
    let geometry = TileGeometry::new(settings.tile_size);
    let board_size = geometry.board_size();

    eframe::run_native(
        "Kamisado",
        eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size(egui::vec2(board_size + 260.0, board_size + 40.0)),
            ..Default::default()
        },
        Box::new(move |ctx| Ok(Box::new(KamisadoApp::new(ctx, service, geometry)))),
    )?;
    Ok(())
}

fn init_logging(settings: &Settings, verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new()
        .add_filter_allow_str("kamisado")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(log_path) = &settings.log {
        if let Some(log_dir) = log_path.parent() {
            fs::create_dir_all(log_dir)?;
        }
        let log_file = File::create(log_path)?;
        loggers.push(WriteLogger::new(level, log_config, log_file));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
