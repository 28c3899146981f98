use anyhow::Context as _;
use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Options come from the location hash, e.g. `index.html#-vv&--no-alert`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

fn init_logger(level: log::Level) -> anyhow::Result<()> {
    console_log::init_with_level(level)
        .map_err(|err| anyhow::anyhow!("error initializing logger: {err}"))
}

fn try_run_app() -> anyhow::Result<()> {
    use gloo::utils::{document, window};

    let location_hash = window().location().hash().unwrap_or_default();
    let args = parse_args(&location_hash).context("could not parse args")?;
    if let Some(log_level) = args.verbose.log_level() {
        init_logger(log_level)?;
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .context("could not find id=\"game\" element")?;

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    if let Err(err) = try_run_app() {
        gloo::console::error!(format!("connect4 failed to start: {err:#}"));
    }
}
