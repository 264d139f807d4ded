//! CLI binary for tree2csv
//!
//! Extracts the `mdps5` tree of a ROOT file into a flat CSV file.

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use tree2csv::{extract, ExtractOptions};

/// Flags historically spelled with a single dash
const SINGLE_DASH_FLAGS: [&str; 2] = ["infile", "outfile"];

/// Rewrite `-infile` / `-outfile` to their `--` form so clap accepts both
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

fn cli() -> Command {
    Command::new("tree2csv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract ROOT tree values out of a flat tree into a CSV file.")
        .arg(
            Arg::new("infile")
                .long("infile")
                .help("Input ROOT filename. (Ex: /path/to/input.root)")
                .value_name("infile.root")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .help("Output CSV filename. (Ex: /path/to/output.csv)")
                .value_name("outfile.csv")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Log every field read (same as RUST_LOG=trace)")
                .action(clap::ArgAction::SetTrue),
        )
}

fn init_logging(matches: &ArgMatches) {
    let log_level = if matches.get_flag("debug") {
        "trace"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches_from(normalize_args(std::env::args_os()));
    init_logging(&matches);

    let (Some(input), Some(output)) = (
        matches.get_one::<PathBuf>("infile"),
        matches.get_one::<PathBuf>("outfile"),
    ) else {
        anyhow::bail!("both -infile and -outfile are required");
    };

    let options = ExtractOptions::default();
    match extract(input, output, &options) {
        Ok(report) => {
            println!(
                "Extracted {} of {} events from tree {} to {}",
                report.written_rows,
                report.total_events,
                options.tree_name,
                output.display()
            );
            Ok(())
        }
        Err(e) if e.is_reported() => {
            println!("Error: {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_single_dash_flags_are_normalized() {
        let normalized = normalize_args(args(&[
            "tree2csv", "-infile", "in.root", "-outfile=out.csv", "--debug",
        ]));
        assert_eq!(
            normalized,
            args(&["tree2csv", "--infile", "in.root", "--outfile=out.csv", "--debug"])
        );
    }

    #[test]
    fn test_cli_accepts_single_dash_flags() {
        let matches = cli()
            .try_get_matches_from(normalize_args(args(&[
                "tree2csv", "-infile", "in.root", "-outfile", "out.csv",
            ])))
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("infile"),
            Some(&PathBuf::from("in.root"))
        );
        assert_eq!(
            matches.get_one::<PathBuf>("outfile"),
            Some(&PathBuf::from("out.csv"))
        );
        assert!(!matches.get_flag("debug"));
    }

    #[test]
    fn test_cli_requires_both_files() {
        let result = cli().try_get_matches_from(args(&["tree2csv", "--infile", "in.root"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }
}
