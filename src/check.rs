//! Runs a kernel over stored test cases and diffs against expected output.

use crate::config::CheckConfig;
use crate::error::{Error, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default)]
pub struct DiffOptions {
    /// Compare lines byte for byte instead of token by token.
    pub whitespace_matters: bool,
    pub str_case: bool,
}

/// One input file and the output it should produce.
#[derive(Debug, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub fin: PathBuf,
    pub fout: PathBuf,
}

/// Writes one message per differing line and returns how many were found.
pub fn diff_lines<'a>(
    given: impl IntoIterator<Item = &'a str>,
    expected: impl IntoIterator<Item = &'a str>,
    options: DiffOptions,
    mut out: impl Write,
) -> Result<usize> {
    let mut given = given.into_iter().collect::<Vec<_>>();
    let mut expected = expected.into_iter().collect::<Vec<_>>();
    if !options.whitespace_matters {
        trim_blank_tail(&mut given);
        trim_blank_tail(&mut expected);
    }

    let mut mismatches = 0;
    for (i, (g, e)) in given.iter().zip(expected.iter()).enumerate() {
        if !lines_match(g, e, options) {
            let msg = format!("line {}: '{}' doesn't match '{}'", i + 1, g, e);
            writeln!(out, "{}", msg.red())?;
            mismatches += 1;
        }
    }

    if given.len() > expected.len() {
        let msg = format!(
            "output has {} more lines than expected",
            given.len() - expected.len()
        );
        writeln!(out, "{}", msg.red())?;
        mismatches += 1;
    } else if given.len() < expected.len() {
        let msg = format!(
            "output has {} fewer lines than expected",
            expected.len() - given.len()
        );
        writeln!(out, "{}", msg.red())?;
        mismatches += 1;
    }
    Ok(mismatches)
}

fn trim_blank_tail(lines: &mut Vec<&str>) {
    while lines.last().map_or(false, |l| l.trim().is_empty()) {
        lines.pop();
    }
}

fn lines_match(given: &str, expected: &str, options: DiffOptions) -> bool {
    let same = |g: &str, e: &str| {
        if options.str_case {
            g == e
        } else {
            g.to_lowercase() == e.to_lowercase()
        }
    };

    if options.whitespace_matters {
        return same(given, expected);
    }

    let mut g_iter = given.split_whitespace();
    let mut e_iter = expected.split_whitespace();
    loop {
        match (g_iter.next(), e_iter.next()) {
            (None, None) => return true,
            (Some(g), Some(e)) if same(g, e) => {}
            _ => return false,
        }
    }
}

/// Replaces every `{}` in `fmt` with `num`.
pub fn dir_file_fmt(fmt: &str, num: u32) -> Result<String> {
    let fmt_token = "{}";
    if !fmt.contains(fmt_token) {
        return Err(Error::BadFormat(fmt.to_owned()));
    }
    Ok(fmt.replace(fmt_token, &num.to_string()))
}

/// Lists the cases named by the input and output paths.
pub fn collect_cases(config: &CheckConfig) -> Result<Vec<Case>> {
    for path in &[&config.fin, &config.fout] {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }
    }

    match (config.fin.is_file(), config.fout.is_file()) {
        (true, true) => Ok(vec![Case {
            name: config.fin.display().to_string(),
            fin: config.fin.clone(),
            fout: config.fout.clone(),
        }]),
        (false, false) => match (&config.fin_fmt, &config.fout_fmt) {
            (Some(fin_fmt), Some(fout_fmt)) => {
                numbered_cases(&config.fin, &config.fout, fin_fmt, fout_fmt)
            }
            (None, None) => globbed_cases(&config.fin, &config.fout),
            _ => Err(Error::MissingFormat),
        },
        _ => Err(Error::MixedPaths {
            fin: config.fin.clone(),
            fout: config.fout.clone(),
        }),
    }
}

/// Cases `1, 2, ...` until the first missing input or output file.
fn numbered_cases(fin: &Path, fout: &Path, fin_fmt: &str, fout_fmt: &str) -> Result<Vec<Case>> {
    let mut cases = Vec::new();
    let mut t = 1;
    loop {
        let fin_path = fin.join(dir_file_fmt(fin_fmt, t)?);
        let fout_path = fout.join(dir_file_fmt(fout_fmt, t)?);
        if !fin_path.is_file() || !fout_path.is_file() {
            trace!("stop at case {}", t);
            break;
        }

        cases.push(Case {
            name: t.to_string(),
            fin: fin_path,
            fout: fout_path,
        });
        t += 1;
    }
    Ok(cases)
}

/// Every `*.in` under `fin` with a matching `<stem>.out` under `fout`.
fn globbed_cases(fin: &Path, fout: &Path) -> Result<Vec<Case>> {
    use glob::glob;

    let pat = fin.join("*.in").display().to_string();
    trace!("collecting {}", pat);

    let mut file_paths = glob(&pat)?.collect::<std::result::Result<Vec<PathBuf>, _>>()?;
    file_paths.sort();

    let mut cases = Vec::new();
    for file_path in file_paths {
        let stem = match file_path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_owned(),
            None => continue,
        };
        let expected = fout.join(format!("{}.out", stem));
        if !expected.is_file() {
            warn!("no expected output for {}", file_path.display());
            continue;
        }

        cases.push(Case {
            name: stem,
            fin: file_path,
            fout: expected,
        });
    }
    Ok(cases)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs every case and reports into `out`. Returns whether all of them passed.
pub fn run(config: &CheckConfig, mut out: impl Write) -> Result<bool> {
    let cases = collect_cases(config)?;
    if cases.is_empty() {
        warn!("no test cases found");
        writeln!(out, "{}", "no test cases found".yellow())?;
        return Ok(false);
    }

    let options = DiffOptions {
        whitespace_matters: config.whitespace_matters,
        str_case: config.str_case,
    };

    let mut passed = 0;
    for case in &cases {
        let header = format!("TEST CASE {}", case.name);
        writeln!(out, "{}", header.cyan().bold())?;
        let input = read(&case.fin)?;
        let expected = read(&case.fout)?;

        let given = match config.kernel.run(&input) {
            Ok(given) => given,
            Err(e) => {
                let msg = format!("{} failed: {}", config.kernel.name(), e);
                writeln!(out, "{}", msg.red())?;
                continue;
            }
        };

        if config.prog_stdout {
            writeln!(out, "stdout output:")?;
            write!(out, "{}", given.green())?;
        }

        let mismatches = diff_lines(given.lines(), expected.lines(), options, &mut out)?;
        if mismatches == 0 {
            writeln!(out, "{}", "test case correct".bright_green())?;
            passed += 1;
        }
    }

    writeln!(out, "{}/{} cases passed", passed, cases.len())?;
    info!("{}/{} cases passed", passed, cases.len());
    Ok(passed == cases.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_lib::Kernel;
    use tempfile::TempDir;

    fn diff(given: &str, expected: &str, options: DiffOptions) -> (usize, String) {
        let mut out = Vec::new();
        let n = diff_lines(given.lines(), expected.lines(), options, &mut out).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    fn config(kernel: Kernel, fin: &Path, fout: &Path) -> CheckConfig {
        CheckConfig {
            kernel,
            fin: fin.to_path_buf(),
            fout: fout.to_path_buf(),
            fin_fmt: None,
            fout_fmt: None,
            whitespace_matters: false,
            str_case: false,
            prog_stdout: false,
        }
    }

    #[test]
    fn test_diff_ignores_spacing_by_default() {
        let (n, _) = diff("1  2\nYES\n\n", "1 2\nyes", DiffOptions::default());
        assert_eq!(0, n);
    }

    #[test]
    fn test_diff_strict() {
        let options = DiffOptions {
            whitespace_matters: true,
            str_case: true,
        };
        let (n, out) = diff("1  2\nYES\n", "1 2\nyes\n", options);
        assert_eq!(2, n);
        assert!(out.contains("line 1: '1  2' doesn't match '1 2'"));
        assert!(out.contains("line 2: 'YES' doesn't match 'yes'"));
    }

    #[test]
    fn test_diff_length() {
        let (n, out) = diff("1\n2\n3\n", "1\n2\n", DiffOptions::default());
        assert_eq!(1, n);
        assert!(out.contains("1 more lines"));

        let (n, out) = diff("1\n", "1\n2\n", DiffOptions::default());
        assert_eq!(1, n);
        assert!(out.contains("1 fewer lines"));
    }

    #[test]
    fn test_mismatch_is_highlighted() {
        colored::control::set_override(true);
        let (n, out) = diff("1\n", "2\n", DiffOptions::default());
        assert_eq!(1, n);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("line 1: '1' doesn't match '2'"));
    }

    #[test]
    fn test_dir_file_fmt() {
        assert_eq!("3.in", dir_file_fmt("{}.in", 3).unwrap());
        assert_eq!("7/7.out", dir_file_fmt("{}/{}.out", 7).unwrap());
        assert!(dir_file_fmt("case.in", 1).is_err());
    }

    #[test]
    fn test_single_file_case() {
        let dir = TempDir::new().unwrap();
        let fin = dir.path().join("haircut.in");
        let fout = dir.path().join("haircut.out");
        fs::write(&fin, "5\n5 2 3 3 0\n").unwrap();
        fs::write(&fout, "0\n4\n4\n5\n7\n").unwrap();

        let mut out = Vec::new();
        assert!(run(&config(Kernel::Haircut, &fin, &fout), &mut out).unwrap());

        fs::write(&fout, "0\n4\n4\n5\n8\n").unwrap();
        let mut out = Vec::new();
        assert!(!run(&config(Kernel::Haircut, &fin, &fout), &mut out).unwrap());
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("line 5: '7' doesn't match '8'"));
    }

    #[test]
    fn test_numbered_cases() {
        let dir = TempDir::new().unwrap();
        for t in 1..=2 {
            fs::write(dir.path().join(format!("{}.in", t)), "2 5\n1 3\n2 5\n").unwrap();
            fs::write(dir.path().join(format!("{}.out", t)), "0\n0\n1\n3\n4\n4\n4\n3\n3\n1\n1\n").unwrap();
        }
        fs::write(dir.path().join("4.in"), "").unwrap();

        let mut check = config(Kernel::ConvIntervals, dir.path(), dir.path());
        check.fin_fmt = Some("{}.in".to_owned());
        check.fout_fmt = Some("{}.out".to_owned());

        let cases = collect_cases(&check).unwrap();
        assert_eq!(vec!["1", "2"], cases.iter().map(|c| c.name.as_str()).collect::<Vec<_>>());
        assert!(run(&check, Vec::new()).unwrap());
    }

    #[test]
    fn test_globbed_cases() {
        let fin = TempDir::new().unwrap();
        let fout = TempDir::new().unwrap();
        fs::write(fin.path().join("b.in"), "1\n0\n").unwrap();
        fs::write(fin.path().join("a.in"), "1\n0\n").unwrap();
        fs::write(fin.path().join("orphan.in"), "1\n0\n").unwrap();
        fs::write(fout.path().join("a.out"), "0\n").unwrap();
        fs::write(fout.path().join("b.out"), "0\n").unwrap();

        let check = config(Kernel::Haircut, fin.path(), fout.path());
        let cases = collect_cases(&check).unwrap();
        assert_eq!(vec!["a", "b"], cases.iter().map(|c| c.name.as_str()).collect::<Vec<_>>());
        assert!(run(&check, Vec::new()).unwrap());
    }

    #[test]
    fn test_kernel_error_fails_case() {
        let dir = TempDir::new().unwrap();
        let fin = dir.path().join("bad.in");
        let fout = dir.path().join("bad.out");
        fs::write(&fin, "1 5\n3 1\n").unwrap();
        fs::write(&fout, "").unwrap();

        let mut out = Vec::new();
        assert!(!run(&config(Kernel::ConvIntervals, &fin, &fout), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("invalid interval"));
    }

    #[test]
    fn test_path_errors() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.in");
        fs::write(&file, "").unwrap();

        match collect_cases(&config(Kernel::Haircut, &file, dir.path())) {
            Err(Error::MixedPaths { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match collect_cases(&config(Kernel::Haircut, &dir.path().join("nope"), dir.path())) {
            Err(Error::PathNotFound(_)) => {}
            other => panic!("unexpected {:?}", other),
        }

        let mut check = config(Kernel::Haircut, dir.path(), dir.path());
        check.fin_fmt = Some("{}.in".to_owned());
        match collect_cases(&check) {
            Err(Error::MissingFormat) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
