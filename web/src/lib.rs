use clap::Parser;
use wasm_bindgen::prelude::*;

mod autocheck;
mod board;
mod config;
mod error;
mod highlight;
mod input;
mod page;
mod puzzle;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let args = Args::try_parse_from(location_hash.split(['#', '&']));
    let log_level = match &args {
        Ok(args) => args.verbose.log_level(),
        Err(_) => Some(log::Level::Warn),
    };
    if let Some(log_level) = log_level {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {}", err));
        }
    }
    if let Err(err) = &args {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }

    page::Page::start();
    log::debug!("Crossword page started");
}
