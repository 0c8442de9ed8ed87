//! `kundali` command-line interface.
//!
//! Prints JSON on stdout. Flags override the configuration file, which
//! overrides the built-in defaults.

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use kundali_chart::{
    ChartOptions, generate_chart, generate_dasha, generate_panchang, generate_unknown_time,
    generate_varshphal,
};
use kundali_config::{ConfigError, KundaliConfig};
use kundali_ephem::SeriesEphemeris;
use serde::Serialize;
use tracing::{debug, info_span};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands, SystemArgs, parse_moment, unknown_time_input};

fn load_config(cli: &Cli) -> Result<KundaliConfig> {
    match &cli.config {
        Some(path) => Ok(KundaliConfig::from_file(path)?),
        None => match KundaliConfig::from_default_location() {
            Err(ConfigError::NotFound) => Ok(KundaliConfig::default()),
            other => Ok(other?),
        },
    }
}

fn init_logging(default_filter: &str, verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { default_filter };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .with_context(|| format!("invalid log filter '{fallback}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Resolved calculation settings for one command.
fn setup(
    config: &KundaliConfig,
    systems: &SystemArgs,
) -> Result<(SeriesEphemeris, ChartOptions)> {
    let mut config = config.clone();
    systems.apply(&mut config);
    config.validate()?;
    let eph = SeriesEphemeris::with_node_mode(config.node_mode()?);
    let options = ChartOptions::from_config(&config)?;
    debug!(
        ayanamsa = options.ayanamsha.name(),
        house_system = options.house_system.name(),
        node_mode = eph.node_mode().name(),
        "resolved settings"
    );
    Ok((eph, options))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging.filter, cli.verbose)?;

    match &cli.command {
        Commands::Chart {
            birth,
            systems,
            dasha_at,
        } => {
            let _span = info_span!("chart", date = %birth.date, time = %birth.time).entered();
            let (eph, mut options) = setup(&config, systems)?;
            if let Some(at) = dasha_at {
                options.dasha_query_jd = Some(parse_moment(at, birth.place.tz)?);
            }
            let chart = generate_chart(&eph, &birth.to_input()?, &options)?;
            print_json(&chart, cli.compact)
        }

        Commands::UnknownTime {
            date,
            place,
            systems,
        } => {
            let _span = info_span!("unknown_time", date = %date).entered();
            let (eph, options) = setup(&config, systems)?;
            let charts = generate_unknown_time(&eph, &unknown_time_input(date, place)?, &options)?;
            print_json(&charts, cli.compact)
        }

        Commands::Panchang { birth, systems } => {
            let _span = info_span!("panchang", date = %birth.date, time = %birth.time).entered();
            let (eph, options) = setup(&config, systems)?;
            let panchang = generate_panchang(&eph, &birth.to_input()?, &options)?;
            print_json(&panchang, cli.compact)
        }

        Commands::Dasha { birth, systems, at } => {
            let _span = info_span!("dasha", date = %birth.date, time = %birth.time).entered();
            let (eph, mut options) = setup(&config, systems)?;
            if let Some(at) = at {
                options.dasha_query_jd = Some(parse_moment(at, birth.place.tz)?);
            }
            let dasha = generate_dasha(&eph, &birth.to_input()?, &options)?;
            print_json(&dasha, cli.compact)
        }

        Commands::Varshphal {
            birth,
            systems,
            year,
            at,
        } => {
            let _span = info_span!("varshphal", date = %birth.date, year = *year).entered();
            let (eph, mut options) = setup(&config, systems)?;
            if let Some(at) = at {
                options.dasha_query_jd = Some(parse_moment(at, birth.place.tz)?);
            }
            let annual = generate_varshphal(&eph, &birth.to_input()?, *year, &options)?;
            print_json(&annual, cli.compact)
        }
    }
}
