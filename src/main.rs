use std::path::PathBuf;
use std::process::ExitCode;

use velo::app::App;
use velo::engine::{DisplayConfig, TimingConfig};
use velo::ui::TuiManager;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(arg) if arg == "-h" || arg == "--help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some(arg) => Some(PathBuf::from(arg)),
        None => None,
    };

    let mut app = App::new(TimingConfig::default(), DisplayConfig::default());
    if let Some(path) = path {
        app.request_load(&path);
    }

    let mut tui = match TuiManager::new() {
        Ok(tui) => tui,
        Err(e) => {
            eprintln!("failed to initialize terminal: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match tui.run_event_loop(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            drop(tui);
            eprintln!("terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("velo — RSVP speed reader for the terminal");
    println!();
    println!("Usage: velo [file.pdf | file.txt | file.md]");
    println!();
    println!("Keys: space play/pause, arrows seek, +/- speed, 0-9 jump, r restart, q quit");
}
