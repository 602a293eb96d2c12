//! Furious Birds entry point
//!
//! Runs one session in the terminal: commands are read from stdin and every
//! frame is printed as ASCII art.

use std::io;

use anyhow::Context;

use furious_birds::Settings;
use furious_birds::platform::{TerminalDisplay, input};
use furious_birds::session::Session;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Furious Birds starting...");

    let settings = Settings::load();
    let seed = settings.seed_or_random();

    let mut display = TerminalDisplay::new();
    let mut session = Session::new(seed, &settings.layout(), settings.scene_options(), move |frame| {
        display.present(&mut io::stdout().lock(), frame);
    })?;

    let queue = session.input().context("input queue already taken")?;
    // Not joined: a reader blocked on stdin must not hold up exit
    input::spawn_reader(io::BufReader::new(io::stdin()), queue).context("starting input reader")?;

    session.run()?;
    Ok(())
}
