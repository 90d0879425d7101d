//! tidegen: generate yearly equilibrium arguments and node factors for
//! tidal constituents.
//!
//! Reads a constituent catalog on stdin and writes the legacy text report
//! on stdout. With `--tables` it instead prints the reference tables the
//! engine is checked against and exits.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Read};
use tidal_constituents::catalog::parse_catalog;
use tidal_constituents::constituent::YearSpan;
use tidal_constituents::report::write_report;
use tidal_constituents::tables::write_reference_tables;

#[derive(Parser)]
#[command(name = "tidegen")]
#[command(about = "Tidal constituent generator")]
#[command(version)]
struct Cli {
    /// First year of the generated series
    #[arg(short = 'b', long, default_value_t = 1970, value_name = "YEAR")]
    begin: u16,

    /// Last year of the generated series
    #[arg(short = 'e', long, default_value_t = 2037, value_name = "YEAR")]
    end: u16,

    /// Evaluate speeds at the middle of the year range instead of 1900
    #[arg(short = 'a', long)]
    ambitious_speeds: bool,

    /// Print the reference tables (engine self-test) and exit
    #[arg(long)]
    tables: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.tables {
        write_reference_tables(&mut out).context("writing reference tables")?;
        return Ok(());
    }

    if !(1..=4000).contains(&cli.begin) || !(1..=4000).contains(&cli.end) {
        bail!("years must lie in 1..=4000");
    }
    if cli.end < cli.begin {
        bail!("end year {} is before begin year {}", cli.end, cli.begin);
    }
    let speed_epoch = if cli.ambitious_speeds {
        (cli.begin + cli.end) / 2
    } else {
        1900
    };
    let span = YearSpan::new(cli.begin, cli.end, speed_epoch);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading catalog from stdin")?;
    let constituents = parse_catalog(&input, span)?;
    write_report(&mut out, &constituents, cli.begin).context("writing report")?;
    Ok(())
}
