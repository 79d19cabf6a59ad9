//! gfroots: GF(2^n) field engine and primitive polynomial explorer
//!
//! This application builds binary finite fields from their defining
//! polynomials and runs the analyses of the library against them.
//!
//! # Subcommands
//!
//! - `tables`: print the validated exponential and logarithm tables of a field
//! - `roots`: search one field for roots of another field's polynomial
//! - `sweep`: root search across lists or catalog degrees of polynomials
//! - `balance`: per-bit tallies over strided generator powers
//! - `syndromes`: chip syndrome table of a field

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use gfroots::analysis::SweepSummary;
use gfroots::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose");

    // Initialize logging; RUST_LOG overrides the verbosity flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")?;

    // Configure the application
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::new(),
    }
    .with_verbose(verbose);
    debug!("Configuration: {:?}", config);

    let json = matches.get_flag("json");
    let start = Instant::now();

    match matches.subcommand() {
        Some(("tables", sub)) => run_tables(sub, json)?,
        Some(("roots", sub)) => run_roots(sub, &config, json)?,
        Some(("sweep", sub)) => run_sweep(sub, &config, json)?,
        Some(("balance", sub)) => run_balance(sub, &config, json)?,
        Some(("syndromes", sub)) => run_syndromes(sub, &config, json)?,
        _ => bail!("No subcommand given, see --help"),
    }

    debug!("Completed in {:?}", start.elapsed());
    Ok(())
}

fn cli() -> Command {
    let poly = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .help(help)
            .required(true)
            .value_name("POLY")
            .value_parser(parse_poly)
    };

    Command::new("gfroots")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Lord Xyn")
        .about("GF(2^n) field engine and primitive polynomial explorer")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON configuration file")
                .global(true)
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("tables")
                .about("Print the exponential and logarithm tables of a field")
                .arg(poly("poly", "Defining polynomial, hex (0x...) or decimal")),
        )
        .subcommand(
            Command::new("roots")
                .about("Search a target field for roots of a source polynomial")
                .arg(poly("source", "Polynomial to evaluate"))
                .arg(poly("target", "Defining polynomial of the field to scan")),
        )
        .subcommand(
            Command::new("sweep")
                .about("Search every target field for roots of every source polynomial")
                .arg(
                    Arg::new("sources")
                        .long("sources")
                        .help("Comma-separated source polynomials")
                        .value_name("POLYS")
                        .value_delimiter(',')
                        .num_args(1..)
                        .value_parser(parse_poly),
                )
                .arg(
                    Arg::new("source-degree")
                        .long("source-degree")
                        .help("Use the catalog polynomials of this degree as sources")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("targets")
                        .long("targets")
                        .help("Comma-separated target polynomials")
                        .value_name("POLYS")
                        .value_delimiter(',')
                        .num_args(1..)
                        .value_parser(parse_poly),
                )
                .arg(
                    Arg::new("target-degree")
                        .long("target-degree")
                        .help("Use the catalog polynomials of this degree as targets")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u32)),
                )
                .group(
                    ArgGroup::new("source-set")
                        .args(["sources", "source-degree"])
                        .required(true),
                )
                .group(
                    ArgGroup::new("target-set")
                        .args(["targets", "target-degree"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("balance")
                .about("Tally set bits over strided generator powers")
                .arg(poly("poly", "Defining polynomial, hex (0x...) or decimal"))
                .arg(
                    Arg::new("chip-cnt")
                        .short('s')
                        .long("chip-cnt")
                        .help("Sampling stride (defaults to the configured value)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("syndromes")
                .about("Print the chip syndrome table of a field")
                .arg(poly("poly", "Defining polynomial, hex (0x...) or decimal"))
                .arg(
                    Arg::new("chips")
                        .long("chips")
                        .help("Number of chips (defaults to the configured value)")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("symbol-bits")
                        .long("symbol-bits")
                        .help("Symbol width in bits (defaults to the configured value)")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
}

/// Parses a polynomial written in hex (`0x` prefix) or decimal.
fn parse_poly(raw: &str) -> std::result::Result<u64, String> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.replace('_', "").parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid polynomial '{}': {}", raw, e))
}

fn poly_arg(matches: &ArgMatches, name: &str) -> Result<u64> {
    matches
        .get_one::<u64>(name)
        .copied()
        .with_context(|| format!("Missing polynomial argument '{}'", name))
}

fn poly_list(matches: &ArgMatches, list: &str, degree: &str) -> Result<Vec<u64>> {
    if let Some(polys) = matches.get_many::<u64>(list) {
        return Ok(polys.copied().collect());
    }
    let degree = matches
        .get_one::<u32>(degree)
        .copied()
        .with_context(|| format!("Either --{} or --{} is required", list, degree))?;
    let polys = primitive_polynomials(degree);
    if polys.is_empty() {
        bail!("The catalog has no primitive polynomials of degree {}", degree);
    }
    Ok(polys.to_vec())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", rendered);
    Ok(())
}

fn run_tables(matches: &ArgMatches, json: bool) -> Result<()> {
    let poly = poly_arg(matches, "poly")?;
    let field = TableField::new(poly)
        .with_context(|| format!("Failed to build tables for {:#x}", poly))?;

    if json {
        print_json(&serde_json::json!({
            "polynomial": poly,
            "degree": field.degree(),
            "exp": field.exp_table(),
            "log": field.log_table(),
        }))
    } else {
        println!("{}", field.descriptor());
        print!("{}", field.render_tables());
        Ok(())
    }
}

fn run_roots(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    let source = FieldDescriptor::new(poly_arg(matches, "source")?)?;
    let target_poly = poly_arg(matches, "target")?;
    let target = Field::new(target_poly, config)
        .with_context(|| format!("Failed to build target field {:#x}", target_poly))?;

    info!("Scanning {} nonzero elements of {}", target.size() - 1, target);
    let report = RootSearch::new(config).run(&source, &target);

    if json {
        print_json(&report)
    } else {
        println!("{}", report);
        Ok(())
    }
}

fn run_sweep(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    let sources = poly_list(matches, "sources", "source-degree")?;
    let targets = poly_list(matches, "targets", "target-degree")?;
    info!(
        "Sweeping {} sources against {} targets",
        sources.len(),
        targets.len()
    );

    let outcome = sweep(&sources, &targets, config)?;

    if json {
        return print_json(&SweepSummary::from(&outcome));
    }

    for report in &outcome.reports {
        println!("{}", report);
    }
    for rejected in &outcome.rejected {
        println!("skipped {:#x}: {}", rejected.polynomial, rejected.error);
    }
    println!(
        "{} of {} pairs have roots, {} candidates skipped",
        outcome.with_roots().count(),
        outcome.reports.len(),
        outcome.rejected.len()
    );
    Ok(())
}

fn run_balance(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    let poly = poly_arg(matches, "poly")?;
    let chip_cnt = matches
        .get_one::<u64>("chip-cnt")
        .copied()
        .unwrap_or_else(|| config.chip_cnt());
    let field = TableField::new(poly)
        .with_context(|| format!("Bit balance needs a table-based field, {:#x} failed", poly))?;

    let report = analyze_bit_balance(&field, chip_cnt)?;

    if json {
        print_json(&report)
    } else {
        print!("{}", report);
        Ok(())
    }
}

fn run_syndromes(matches: &ArgMatches, config: &Config, json: bool) -> Result<()> {
    let poly = poly_arg(matches, "poly")?;
    let chips = matches
        .get_one::<u32>("chips")
        .copied()
        .unwrap_or_else(|| config.chips());
    let symbol_bits = matches
        .get_one::<u32>("symbol-bits")
        .copied()
        .unwrap_or_else(|| config.symbol_bits());
    let field = Field::new(poly, config)
        .with_context(|| format!("Failed to build field {:#x}", poly))?;

    let table = chip_syndromes(&field, chips, symbol_bits)?;
    if !table.is_distinct() {
        info!("Some syndromes are shared between chips in {}", field);
    }

    if json {
        print_json(&table)
    } else {
        print!("{}", table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_poly() {
        assert_eq!(parse_poly("0x11D"), Ok(0x11D));
        assert_eq!(parse_poly("0X13"), Ok(0x13));
        assert_eq!(parse_poly("285"), Ok(0x11D));
        assert_eq!(parse_poly("0x1_0040_0007"), Ok(0x100400007));
        assert!(parse_poly("0xZZ").is_err());
        assert!(parse_poly("").is_err());
    }

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_sweep_accepts_catalog_degrees() {
        let matches = cli()
            .try_get_matches_from(["gfroots", "sweep", "--source-degree", "2", "--targets", "0x13,0x11D"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(poly_list(sub, "sources", "source-degree").unwrap(), vec![0x7]);
        assert_eq!(poly_list(sub, "targets", "target-degree").unwrap(), vec![0x13, 0x11D]);
    }

    #[test]
    fn test_sweep_requires_sources() {
        assert!(cli()
            .try_get_matches_from(["gfroots", "sweep", "--targets", "0x13"])
            .is_err());
    }
}
