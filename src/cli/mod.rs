/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Running without arguments renders both standard figures into the working
//! directory.

use crate::config::AppConfig;
use crate::plot::{render_density_figure, render_radial_figure, FigureSummary};
use crate::wavefunction::{radial_extent, radial_normalization};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

/// Simpson intervals used by `check`
const CHECK_INTERVALS: usize = 20_000;

/// Largest acceptable deviation of a normalization integral from 1
const CHECK_TOLERANCE: f64 = 1e-3;

/// Probability densities of hydrogen-like orbitals
#[derive(Parser, Debug)]
#[command(name = "hydrogen-orbitals", version, about, long_about = None)]
pub struct Cli {
    /// JSON configuration file; omitted fields keep their defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for rendered figures
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Override the resolution of every figure
    #[arg(long, global = true)]
    pub dpi: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render both figures
    All,
    /// Render the orthogonal-section density figure
    Density,
    /// Render the radial probability density figure
    Radial,
    /// Print ∫|R_nl|² r² dr for every (n, l) up to n_max
    Check {
        #[arg(long, default_value_t = 4)]
        n_max: i32,
    },
    /// Print the effective configuration as JSON
    PrintConfig,
}

impl Cli {
    /// The requested command, `all` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }

    /// Load the configuration file, if any, and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dpi) = self.dpi {
            config.density.size.dpi = dpi;
            config.radial.size.dpi = dpi;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Execute the parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;

    match cli.command() {
        Command::All => {
            report(render_density(&config)?);
            report(render_radial(&config)?);
        }
        Command::Density => report(render_density(&config)?),
        Command::Radial => report(render_radial(&config)?),
        Command::Check { n_max } => check_normalization(&config, n_max)?,
        Command::PrintConfig => println!("{}", config.to_json()?),
    }

    Ok(())
}

fn render_density(config: &AppConfig) -> anyhow::Result<FigureSummary> {
    let path = config.density_path();
    render_density_figure(&config.density, &config.params, &path)
        .with_context(|| format!("rendering density figure to {}", path.display()))
}

fn render_radial(config: &AppConfig) -> anyhow::Result<FigureSummary> {
    let path = config.radial_path();
    render_radial_figure(&config.radial, &config.params, &path)
        .with_context(|| format!("rendering radial figure to {}", path.display()))
}

fn report(summary: FigureSummary) {
    println!("Figure saved as {}", summary);
}

/// Print normalization integrals and fail if any is off by more than the tolerance
fn check_normalization(config: &AppConfig, n_max: i32) -> anyhow::Result<()> {
    if n_max < 1 {
        bail!("n_max must be at least 1, got {}", n_max);
    }

    let params = &config.params;
    info!(
        "Checking radial normalization up to n={} (Z={}, a0={})",
        n_max, params.z, params.a0
    );

    println!("{:>3} {:>3} {:>14} {:>10}", "n", "l", "integral", "status");
    let mut failures = 0;
    for n in 1..=n_max {
        for l in 0..n {
            let r_max = radial_extent(n, params.z, params.a0);
            let integral =
                radial_normalization(n, l, params.z, params.a0, r_max, CHECK_INTERVALS)?;
            let ok = (integral - 1.0).abs() <= CHECK_TOLERANCE;
            if !ok {
                failures += 1;
            }
            println!(
                "{:>3} {:>3} {:>14.10} {:>10}",
                n,
                l,
                integral,
                if ok { "ok" } else { "FAIL" }
            );
        }
    }

    if failures > 0 {
        bail!("{} radial functions are not normalized", failures);
    }
    Ok(())
}
