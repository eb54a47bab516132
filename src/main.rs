use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use waypost::core::config;
use waypost::tui;

#[derive(Parser)]
#[command(name = "waypost", about = "Stack-navigation router demo for ratatui")]
struct Args {
    /// Log level override (error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}; falling back to defaults");
        config::WaypostConfig::default()
    });
    let resolved = config::resolve(&file_config, args.log_level.as_deref());

    // File logger: the terminal itself belongs to the TUI.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = resolved
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!(
        "Waypost starting up (event: {}, log level: {})",
        resolved.event_name,
        level
    );

    tui::run(resolved)
}
