// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::error::{ContextKind, ErrorKind};
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory as _, FromArgMatches as _, Parser};
use std::ffi::OsString;
use std::io;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::scanner::find_matches;
use crate::models::MatchCriteria;
use crate::report::write_table;

/// Arguments that, in first position, mean DIRECTORY was left out.
const LEADING_FLAGS: [&str; 8] = [
    "-n", "--name", "-d", "--date", "-c", "--camera", "-h", "--help",
];

const OUTPUT_FORMAT: &str =
    "Output format:\n  MATCHES       FILENAME           CAMERA_MODEL         CAPTURE_DATE";

#[derive(Parser, Debug)]
#[command(author, about, long_about = None, after_help = OUTPUT_FORMAT, args_override_self = true)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Match filename (case-insensitive, supports * wildcard)
    #[arg(short, long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub name: Option<Option<String>>,

    /// Match exact capture date (YYYY:MM:DD)
    #[arg(short, long, value_name = "DATE", allow_hyphen_values = true)]
    pub date: Option<Option<String>>,

    /// Match camera model (case-insensitive, supports * wildcard)
    #[arg(short, long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub camera: Option<Option<String>>,
}

impl Args {
    /// The filters to apply. A flag given without a value leaves its
    /// criterion disabled.
    #[inline]
    #[must_use]
    pub fn criteria(&self) -> MatchCriteria {
        MatchCriteria::new(
            flag_value(self.name.as_ref()),
            flag_value(self.date.as_ref()),
            flag_value(self.camera.as_ref()),
        )
    }
}

fn flag_value(flag: Option<&Option<String>>) -> &str {
    flag.and_then(Option::as_deref).unwrap_or_default()
}

/// Parses the command line, or decides the exit code when no scan should run.
///
/// * No arguments at all prints usage to stderr and fails.
/// * `-h`/`--help` prints usage to stdout and succeeds, whatever else was given.
/// * An unrecognised argument prints `Unknown option: <arg>` and usage, then fails.
///   When the first argument is a flag, DIRECTORY defaults to `.` and a later
///   bare argument counts as unrecognised.
/// * A flag given twice keeps its last value. Flag values may start with `-`.
#[inline]
pub fn parse_args<I, T>(argv: I) -> ControlFlow<ExitCode, Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() < 2 {
        eprint!("{}", Args::command().render_help());
        return ControlFlow::Break(ExitCode::FAILURE);
    }

    let matches = match Args::command().try_get_matches_from_mut(argv.clone()) {
        Ok(matches) => matches,
        Err(err) => return ControlFlow::Break(report_parse_error(&err)),
    };

    if let Some(directory) = stray_directory(&argv, &matches) {
        return ControlFlow::Break(report_unknown_option(&directory.display().to_string()));
    }

    match Args::from_arg_matches(&matches) {
        Ok(args) => ControlFlow::Continue(args),
        Err(err) => ControlFlow::Break(report_parse_error(&err)),
    }
}

/// A DIRECTORY that followed a leading flag instead of coming first.
fn stray_directory<'a>(argv: &[OsString], matches: &'a ArgMatches) -> Option<&'a PathBuf> {
    let leads_with_flag = argv
        .get(1)
        .and_then(|arg| arg.to_str())
        .is_some_and(|arg| LEADING_FLAGS.contains(&arg));

    if leads_with_flag && matches.value_source("directory") == Some(ValueSource::CommandLine) {
        matches.get_one::<PathBuf>("directory")
    } else {
        None
    }
}

fn report_unknown_option(arg: &str) -> ExitCode {
    eprintln!("Unknown option: {arg}");
    eprint!("{}", Args::command().render_help());
    ExitCode::FAILURE
}

fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp => {
            print!("{}", Args::command().render_help());
            ExitCode::SUCCESS
        }
        ErrorKind::UnknownArgument => {
            let arg = err
                .get(ContextKind::InvalidArg)
                .map_or_else(String::new, ToString::to_string);
            report_unknown_option(&arg)
        }
        _ => {
            eprint!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Validates the directory, scans it and prints the result table.
///
/// Returns `ExitCode::FAILURE` after printing `No files found` when nothing
/// qualifies.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory does not exist or is not a directory
/// * Writing to stdout fails
#[inline]
pub fn run(args: &Args) -> Result<ExitCode> {
    validate_directory(&args.directory)?;

    let criteria = args.criteria();
    let files = find_matches(&args.directory, &criteria.date, &criteria.model, &criteria.name);

    if files.is_empty() {
        eprintln!("No files found");
        return Ok(ExitCode::FAILURE);
    }

    write_table(&mut io::stdout().lock(), &files).context("Failed to write results")?;
    Ok(ExitCode::SUCCESS)
}

fn validate_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        bail!("Directory '{}' does not exist", dir.display());
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory", dir.display());
    }
    Ok(())
}
