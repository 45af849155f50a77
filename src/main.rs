mod ui;

use clap::Parser;
use egui::Vec2;
use log::error;

use lapwatch::LapwatchError;
use ui::StopwatchApp;
use ui::config::{AppConfig, validate_tick_interval};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How often the displayed time refreshes, in milliseconds
    #[arg(short, long)]
    tick_ms: Option<u64>,

    /// Keep the stopwatch window above other windows
    #[arg(long)]
    on_top: bool,
}

fn run(args: &Args) -> Result<(), LapwatchError> {
    let mut app_config = AppConfig::from_local_file().unwrap_or_default();
    if let Some(tick_ms) = args.tick_ms {
        app_config.tick_interval_ms = validate_tick_interval(tick_ms)?;
    }
    if args.on_top {
        app_config.always_on_top = true;
    }

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_decorations(false)
        .with_transparent(true)
        .with_inner_size(Vec2::new(340., 480.))
        .with_position(app_config.window_position.clone());
    if app_config.always_on_top {
        native_options.viewport = native_options.viewport.with_always_on_top();
    }

    eframe::run_native(
        "Lapwatch",
        native_options,
        Box::new(|cc| Ok(Box::new(StopwatchApp::new(app_config, cc)))),
    )
    .map_err(|e| LapwatchError::AppStartError {
        reason: e.to_string(),
    })
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    if let Err(e) = run(&cli) {
        error!("Error while running stopwatch: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
