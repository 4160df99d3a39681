/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for hydrogen-orbitals

use clap::Parser;
use hydrogen_orbitals::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("hydrogen-orbitals v{}", hydrogen_orbitals::VERSION);

    let cli = Cli::parse();
    cli::run(cli)
}
