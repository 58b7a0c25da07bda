use std::io;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use flipmine_core::{Board, RandomMinefieldGenerator, Session};

use game::GameEnd;
use render::{ConsoleRenderer, Renderer};
use setup::Preset;

mod game;
mod input;
mod render;
mod setup;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board width, asked for when omitted
    #[arg(short = 'x', long, value_parser = clap::value_parser!(u8).range(1..))]
    width: Option<u8>,

    /// Board height, asked for when omitted
    #[arg(short = 'y', long, value_parser = clap::value_parser!(u8).range(1..))]
    height: Option<u8>,

    /// Number of mines, asked for when omitted
    #[arg(short, long)]
    mines: Option<u16>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let preset = Preset {
        width: args.width,
        height: args.height,
        mines: args.mines,
    };
    let mut input = io::stdin().lock();
    let mut renderer = ConsoleRenderer::new(io::stdout());

    renderer.draw_prompt(concat!("flipmine v", env!("CARGO_PKG_VERSION"), "\n"))?;
    loop {
        let Some(config) = setup::read_config(&preset, &mut input, &mut renderer)? else {
            break;
        };

        let seed = args.seed.unwrap_or_else(rand::random);
        log::debug!("seed: {}", seed);
        let board = Board::new(config, RandomMinefieldGenerator::new(seed))
            .context("could not build the board")?;
        let mut session = Session::new(board);

        if game::play(&mut session, &mut input, &mut renderer)? == GameEnd::Quit {
            break;
        }
        if !game::ask_restart(&mut input, &mut renderer)? {
            break;
        }
    }

    log::debug!("Bye");
    Ok(())
}
