use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use jsonmend::{Config, Error, Result, Validator, report};

const USAGE: &str = "\
Usage: jsonmend [FILE|-] [OPTIONS]

Checks a JSON document, pinpoints the first syntax error and proposes a fix.
Reads standard input when FILE is omitted or '-'.

Options:
  --json           Print the result as JSON
  --no-tips        Omit general fixing tips
  --radius N       Characters shown on each side of the error
  --indent N       Indentation width of pretty-printed output
  --context N      Lines shown around the failing line
  --save-config    Store the given options in ~/.jsonmend/config.json
  -h, --help       Show this help
  -V, --version    Show the version";

/// Parsed command-line arguments
#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    json: bool,
    save_config: bool,
    help: bool,
    version: bool,
}

/// Parse arguments, applying option overrides onto `config`
fn parse_args(args: &[String], config: &mut Config) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--no-tips" => config.show_tips = false,
            "--save-config" => parsed.save_config = true,
            "--radius" => config.radius = numeric_value(arg, iter.next())?,
            "--indent" => config.indent = numeric_value(arg, iter.next())?,
            "--context" => config.context_lines = numeric_value(arg, iter.next())?,
            "-h" | "--help" => parsed.help = true,
            "-V" | "--version" => parsed.version = true,
            "-" => parsed.input = None,
            flag if flag.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option '{}'\n\n{}", flag, USAGE)));
            }
            path => {
                if parsed.input.is_some() {
                    let message = format!("only one input file is accepted\n\n{}", USAGE);
                    return Err(Error::Usage(message));
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

fn numeric_value(flag: &str, value: Option<&String>) -> Result<usize> {
    let value = value.ok_or_else(|| Error::Usage(format!("{} needs a value", flag)))?;
    value.parse().map_err(|_| {
        Error::Usage(format!("{} expects a non-negative number, got '{}'", flag, value))
    })
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::ReadInput {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Install a stderr subscriber only when RUST_LOG is set
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = Config::load();
    let args = parse_args(&args, &mut config)?;

    if args.help {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }
    if args.version {
        println!("jsonmend {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }
    if args.save_config {
        let path = config.save()?;
        eprintln!("saved settings to {}", path.display());
        if args.input.is_none() {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let raw = read_input(args.input.as_ref())?;
    let text = raw.trim();

    let validator = Validator::new(jsonmend::LenientRepairer, config.validator_options());
    let validation = validator.validate(text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&validation)?);
    } else {
        print!("{}", report::render(&validation, text, &config));
    }

    Ok(if validation.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("jsonmend: {}", e);
            ExitCode::from(2)
        }
    }
}
