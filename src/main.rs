use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use shan_note::core::config;
use shan_note::tui;

#[derive(Parser)]
#[command(name = "shan-note", about = "Terminal note surface with live QWERTY→Shan remapping")]
struct Args {
    /// Start with Shan remapping disabled (plain Latin input)
    #[arg(long)]
    no_remap: bool,

    /// Log level for shan-note.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}, using defaults");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.no_remap, args.log_level.as_deref());

    // Initialize file logger - writes to shan-note.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shan-note.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Shan Note starting up (remap: {})", resolved.remap_enabled);

    tui::run(resolved)
}
