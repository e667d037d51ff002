//-------------------------------------------------------------------//
//    plasmainit : initial plasma state generator for 3D PIC codes   //
//           version 1.0, release date: October 19, 2026             //
//-------------------------------------------------------------------//
// Disclaimer: plasmainit is free software: you can redistribute it  //
// and/or modify it under the terms of the GNU General Public License//
// as published by the Free Software Foundation, version 3.          //
// This program is distributed in the hope that it will be useful,   //
// but WITHOUT ANY WARRANTY; without even the implied warranty of    //
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU  //
// General Public License for more details at                        //
// https://www.gnu.org/licenses/gpl-3.0.html.                        //
//-------------------------------------------------------------------//

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};

use plasmainit::display::write_scatter;
use plasmainit::{read_parameter_file, Configuration, Dataset, InitialPlasma, Result};

/// Builds the initial particle and field state of a 3D PIC run.
#[derive(Parser, Debug)]
#[command(name = "plasmainit", version, about)]
struct Cli {
    /// Parameter file, one `value # comment` line per parameter
    config: PathBuf,

    /// Dataset to write
    output: PathBuf,

    /// Also write a scatter plot of the positions to <OUTPUT>.svg
    #[arg(short = 'd', long = "display")]
    display: bool,

    /// Seed for the random number generator (entropy if absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!(">> plasmainit: starting...");
    println!(">> plasmainit: **************************************************************************");
    println!(">> plasmainit: This program comes with ABSOLUTELY NO WARRANTY");
    println!(">> plasmainit: This is free software, you are welcome to use, modify and redistribute it");
    println!(">> plasmainit: according to the GNU General Public License, https://www.gnu.org/licenses/");
    println!(">> plasmainit: **************************************************************************");

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.fatal_report());
        std::process::exit(1);
    }
    println!(">> plasmainit: initial plasma written to {}", cli.output.display());
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let raw = read_parameter_file(&cli.config)?;
    let config = Configuration::from_raw(raw)?;
    info!("input file {} is coherent, computing data", cli.config.display());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let plasma = InitialPlasma::generate(&config, &mut rng)?;

    Dataset::from_plasma(&plasma)?.save(&cli.output)?;

    if cli.display {
        let mut svg = cli.output.clone().into_os_string();
        svg.push(".svg");
        write_scatter(&PathBuf::from(svg), &plasma)?;
    }
    Ok(())
}
