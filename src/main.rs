mod debug_report;

use linegroup::{Error, Options, group_file, io};
use log::{LevelFilter, Log, Metadata, Record};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "result.txt";
const DEBUG_ENV: &str = "LINEGROUP_DEBUG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), Error> {
    let run = group_file(&config.input, &config.options)?;

    if config.summary {
        debug_report::print_run(&config.input, &run, config.color);
    }

    let delimiter = config.options.delimiter();
    match &config.output {
        Output::Stdout => io::write_report(&run.report, delimiter, std::io::stdout().lock())
            .map_err(|source| Error::OutputWrite { path: PathBuf::from("-"), source }),
        Output::File(path) => io::write_report_file(&run.report, delimiter, path),
    }
}

// --- Logging -------------------------------------------------------------------

/// Writes `log` records to stderr. Installed only when `LINEGROUP_DEBUG` is set.
///
/// Failures to write a log line are ignored; they never affect the run.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let Some(value) = std::env::var_os(DEBUG_ENV) else {
        return;
    };
    let level = match value.to_str().map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("0") | Some("off") => return,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// --- Arguments -----------------------------------------------------------------

enum Output {
    Stdout,
    File(PathBuf),
}

struct CliConfig {
    input: PathBuf,
    output: Output,
    options: Options,
    summary: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<PathBuf> = None;
    let mut output = Output::File(PathBuf::from(DEFAULT_OUTPUT));
    let mut options = Options::default();
    let mut summary = false;
    let mut color = std::io::stderr().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("linegroup {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--summary" => summary = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--output" | "-o" => {
                let value = args.next().ok_or_else(|| "error: --output expects a value".to_string())?;
                output = parse_output(&value);
            }
            "--delimiter" | "-d" => {
                let value = args.next().ok_or_else(|| "error: --delimiter expects a value".to_string())?;
                options = parse_delimiter(&value)?;
            }
            _ if arg.starts_with("--output=") => {
                output = parse_output(arg.trim_start_matches("--output="));
            }
            _ if arg.starts_with("--delimiter=") => {
                options = parse_delimiter(arg.trim_start_matches("--delimiter="))?;
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    let Some(input) = input else {
        return Err(format!("error: no input file provided\n\n{}", help_text()));
    };

    Ok(CliConfig { input, output, options, summary, color })
}

fn parse_output(value: &str) -> Output {
    if value == "-" { Output::Stdout } else { Output::File(PathBuf::from(value)) }
}

fn parse_delimiter(value: &str) -> Result<Options, String> {
    let mut chars = value.chars();
    let (Some(delimiter), None) = (chars.next(), chars.next()) else {
        return Err(format!("error: --delimiter expects a single character, got '{value}'"));
    };
    Options::with_delimiter(delimiter).map_err(|err| format!("error: {err}"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "linegroup {version}

Groups records that share a non-empty value at the same field position.

Usage:
  linegroup [OPTIONS] <input>

Options:
  -o, --output <path>        Report destination. Use '-' for stdout.
                             Default: {default_output}
  -d, --delimiter <char>     Field delimiter. Default: ;
  --summary                  Print a run summary to stderr.
  --color                    Force ANSI color in the summary.
  --no-color                 Disable ANSI color in the summary.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {debug_env}=1              Log phase details to stderr.
  {debug_env}=trace          Also log every group decision.

Exit codes:
  0  Success.
  1  Input could not be read or report could not be written.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_output = DEFAULT_OUTPUT,
        debug_env = DEBUG_ENV,
    )
}
