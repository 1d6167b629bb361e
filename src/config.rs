//! Defines data structures of command line arguments.

use kernel_lib::Kernel;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub quiet: bool,
    pub command: Command,
}

#[derive(Debug)]
pub enum Command {
    Haircut { input: PathBuf, output: PathBuf },
    ConvIntervals,
    Check(CheckConfig),
}

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub kernel: Kernel,
    pub fin: PathBuf,
    pub fout: PathBuf,
    pub fin_fmt: Option<String>,
    pub fout_fmt: Option<String>,
    pub whitespace_matters: bool,
    pub str_case: bool,
    pub prog_stdout: bool,
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Option<Self> {
        let mut quiet = gm.is_present("quiet");

        let command = match gm.subcommand() {
            ("haircut", Some(sm)) => {
                quiet |= sm.is_present("quiet");
                Command::Haircut {
                    input: path_of(sm, "input")?,
                    output: path_of(sm, "output")?,
                }
            }
            ("conv-intervals", sm) => {
                quiet |= sm.map_or(false, |sm| sm.is_present("quiet"));
                Command::ConvIntervals
            }
            ("check", Some(sm)) => {
                quiet |= sm.is_present("quiet");
                let kernel = sm.value_of("kernel").and_then(Kernel::from_name);
                let kernel = match kernel {
                    Some(kernel) => kernel,
                    None => {
                        error!("unknown kernel {:?}", sm.value_of("kernel"));
                        return None;
                    }
                };
                let check = CheckConfig {
                    kernel,
                    fin: path_of(sm, "fin")?,
                    fout: path_of(sm, "fout")?,
                    fin_fmt: sm.value_of("fin-fmt").map(|s| s.to_owned()),
                    fout_fmt: sm.value_of("fout-fmt").map(|s| s.to_owned()),
                    whitespace_matters: sm.is_present("whitespace-fmt"),
                    str_case: sm.is_present("str-case"),
                    prog_stdout: sm.is_present("prog-stdout"),
                };
                trace!("check {:?}", check);
                Command::Check(check)
            }
            _ => {
                error!("unknown subcommand");
                return None;
            }
        };

        Some(Config { quiet, command })
    }
}

fn path_of(sm: &clap::ArgMatches, name: &str) -> Option<PathBuf> {
    let path = sm.value_of(name).map(PathBuf::from);
    if path.is_none() {
        error!("missing --{}", name);
    }
    path
}
