use clap::Parser;
use concentration_core::BoardSize;
use wasm_bindgen::prelude::*;

mod audio;
mod game;
mod panels;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Force a seed for the first deal instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board to start with, 4x4 or 6x6
    #[arg(short, long, default_value = "4x4")]
    board: String,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--seed=42&--board=6x6`
    fn from_location_hash(location_hash: &str) -> Self {
        Self::try_parse_from(location_hash.split(['#', '&'])).unwrap_or_else(|err| {
            gloo::console::warn!(format!("Ignoring bad arguments in location hash: {}", err));
            Self::parse_from([""])
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {}", err));
        }
    }
    log::debug!("args: {:?}", args);

    let props = game::GameProps {
        seed: args.seed,
        board_size: BoardSize::from_label(&args.board),
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::info!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_arguments_are_parsed() {
        let args = Args::try_parse_from("#-vv&--seed=42&--board=6x6".split(['#', '&'])).unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(BoardSize::from_label(&args.board), BoardSize::Large);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Trace));
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(BoardSize::from_label(&args.board), BoardSize::Small);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }
}
