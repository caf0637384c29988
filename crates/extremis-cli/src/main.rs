use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use extremis_cli::gauss::{input as gauss_input, report};
use extremis_cli::taylor::{self, input as taylor_input};
use extremis_gauss::GaussianPrimeCache;

fn config_arg(help: &'static str) -> Arg {
    Arg::new("config")
        .help(help)
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("EXTREMIS_LOG", "error,extremis=info"))
        .init();

    let matches = Command::new("extremis")
        .version(clap::crate_version!())
        .about("Gaussian integer ring pressure and truncated matrix exponentials")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("gauss")
                .about("Factor naturals and fold the Gaussian norm lattice into rings")
                .subcommand_required(true)
                .subcommand(
                    Command::new("factor")
                        .about("Print the factorization and splitting status of a natural number")
                        .arg(
                            Arg::new("n")
                                .help("Natural number below the cache size")
                                .required(true)
                                .allow_negative_numbers(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("cache_size")
                                .short('n')
                                .long("cache-size")
                                .help("Number of naturals held in the prime cache")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                )
                .subcommand(
                    Command::new("rings")
                        .about("Write the ring mass/pressure table as TSV to stdout")
                        .arg(config_arg("Path to a JSON lattice configuration file"))
                        .arg(
                            Arg::new("scale")
                                .short('s')
                                .long("scale")
                                .help("Linear scale of lattice coordinates. Overrides the configuration file.")
                                .value_parser(clap::value_parser!(f64)),
                        )
                        .arg(
                            Arg::new("cache_size")
                                .short('n')
                                .long("cache-size")
                                .help("Exclusive norm bound of the lattice. Overrides the configuration file.")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ),
        )
        .subcommand(
            Command::new("taylor")
                .about("Evaluate the truncated exponential series of a square matrix")
                .arg(config_arg("Path to a JSON series configuration file"))
                .arg(
                    Arg::new("order")
                        .short('k')
                        .long("order")
                        .help("Truncation order. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .help("Size of the rotation seed matrix when no matrix is configured.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .help("Digits after the decimal point")
                        .default_value("6")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("gauss", sub_m)) => handle_gauss(sub_m),
        Some(("taylor", sub_m)) => handle_taylor(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_gauss(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("factor", factor_matches)) => {
            let n = *factor_matches.get_one::<i64>("n").unwrap();
            let line = match factor_matches.get_one::<usize>("cache_size") {
                Some(&size) => report::describe_factorization(&GaussianPrimeCache::new(size), n)?,
                None => report::describe_factorization(GaussianPrimeCache::global(), n)?,
            };
            println!("{}", line);
            Ok(())
        }
        Some(("rings", rings_matches)) => {
            let config = gauss_input::from_arguments(rings_matches)?;
            log::info!(
                "[Extremis::Gauss] Building rings: cache_size {}, scale {}",
                config.cache_size,
                config.scale
            );
            let rows = report::ring_rows(&config)?;
            report::write_ring_table(&rows, io::stdout().lock())
        }
        _ => unreachable!(),
    }
}

fn handle_taylor(matches: &ArgMatches) -> Result<()> {
    let config = taylor_input::from_arguments(matches)?;
    let precision = *matches.get_one::<usize>("precision").unwrap();
    log::info!(
        "[Extremis::Taylor] Evaluating order {} series",
        config.order
    );

    match config.build() {
        Ok(series) => {
            print!("{}", taylor::render_series(&series, precision));
            Ok(())
        }
        Err(e) => {
            log::error!("Series evaluation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
