#[macro_use]
extern crate clap;
extern crate colored;
extern crate env_logger;
extern crate glob;
extern crate kernel_lib;
#[macro_use]
extern crate log;
extern crate thiserror;

mod check;
mod config;
mod error;

use crate::config::{Command, Config};
use crate::error::{Error, Result};
use kernel_lib::Kernel;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;
use std::time::Duration;

/// Builds CLI app metadata, especially command line arguments format
/// and parses given arguments.
fn parse_args<'a>() -> clap::ArgMatches<'a> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion, SubcommandRequiredElseHelp]
    };
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .arg(
            clap::Arg::with_name("quiet")
                .long("quiet")
                .short("q")
                .global(true)
                .help("Don't report elapsed time on stderr"),
        )
        .subcommand(
            clap::SubCommand::with_name("haircut")
                .about("Badness for every truncation length")
                .arg(
                    clap::Arg::with_name("input")
                        .long("input")
                        .takes_value(true)
                        .default_value("haircut.in")
                        .help("File to read hair lengths from"),
                )
                .arg(
                    clap::Arg::with_name("output")
                        .long("output")
                        .takes_value(true)
                        .default_value("haircut.out")
                        .help("File to write results to (also mirrored to stdout)"),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("conv-intervals")
                .about("Interval-pair coverage of every position, stdin to stdout"),
        )
        .subcommand(
            clap::SubCommand::with_name("check")
                .about("Runs a kernel on stored inputs and diffs against expected outputs")
                .arg(
                    clap::Arg::with_name("kernel")
                        .required(true)
                        .possible_values(&["haircut", "conv-intervals"])
                        .help("Kernel to run"),
                )
                .arg(
                    clap::Arg::with_name("fin")
                        .long("fin")
                        .takes_value(true)
                        .required(true)
                        .help("File or directory to use for input"),
                )
                .arg(
                    clap::Arg::with_name("fout")
                        .long("fout")
                        .takes_value(true)
                        .required(true)
                        .help("File or directory that contains the expected outputs"),
                )
                .arg(
                    clap::Arg::with_name("fin-fmt")
                        .long("fin-fmt")
                        .takes_value(true)
                        .help("Input file names in a directory; `{}` is replaced with 1, 2, ..."),
                )
                .arg(
                    clap::Arg::with_name("fout-fmt")
                        .long("fout-fmt")
                        .takes_value(true)
                        .help("Expected output file names, same as --fin-fmt"),
                )
                .arg(
                    clap::Arg::with_name("whitespace-fmt")
                        .long("whitespace-fmt")
                        .help("Compare lines exactly, spacing included"),
                )
                .arg(
                    clap::Arg::with_name("str-case")
                        .long("str-case")
                        .help("Compare case-sensitively"),
                )
                .arg(
                    clap::Arg::with_name("prog-stdout")
                        .long("prog-stdout")
                        .help("Print the kernel output along with the diff"),
                ),
        )
        .get_matches()
}

fn report(kernel: Kernel, elapsed: Duration, quiet: bool) {
    info!("{} finished in {:?}", kernel.name(), elapsed);
    if !quiet {
        eprintln!("{} took {} ms", kernel.name(), elapsed.as_millis());
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Writes the results to `output` and mirrors them into `mirror`.
fn haircut(input: &Path, output: &Path, quiet: bool, mut mirror: impl Write) -> Result<()> {
    let text = read_file(input)?;
    let (result, elapsed) = kernel_lib::timed(|| Kernel::Haircut.run(&text));
    let rendered = result?;

    // The output file only appears once every value is known.
    fs::write(output, &rendered).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    mirror.write_all(rendered.as_bytes())?;

    report(Kernel::Haircut, elapsed, quiet);
    Ok(())
}

fn conv_intervals(quiet: bool) -> Result<()> {
    let text = read_stdin()?;
    let (result, elapsed) = kernel_lib::timed(|| Kernel::ConvIntervals.run(&text));
    io::stdout().write_all(result?.as_bytes())?;

    report(Kernel::ConvIntervals, elapsed, quiet);
    Ok(())
}

fn run(config: &Config) -> Result<bool> {
    match config.command {
        Command::Haircut {
            ref input,
            ref output,
        } => {
            let stdout = io::stdout();
            haircut(input, output, config.quiet, stdout.lock()).map(|()| true)
        }
        Command::ConvIntervals => conv_intervals(config.quiet).map(|()| true),
        Command::Check(ref check) => {
            let stdout = io::stdout();
            let passed = check::run(check, stdout.lock())?;
            Ok(passed)
        }
    }
}

fn main() {
    env_logger::init();

    let matches = parse_args();
    let config = match Config::from_matches(&matches) {
        Some(config) => config,
        None => process::exit(2),
    };
    debug!("{:?}", config);

    let code = match run(&config) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            1
        }
    };
    process::exit(code);
}
