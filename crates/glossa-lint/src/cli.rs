//! Command-line argument parsing for `glossa-lint`.
//!
//! Parses args manually; `GLOSSA_LINT_*` environment variables override
//! the defaults and are themselves overridden by flags.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
glossa-lint — word and paragraph length checks for translation files

USAGE:
    glossa-lint [OPTIONS] [DIR]

OPTIONS:
    --dir=PATH        Directory of <lang>.json locale files (default: locales)
    --rules=PATH      JSON rules file (default: i18n-rules.json)
    --log=FILTER      Tracing filter for diagnostics on stderr (default: warn)
    --quiet, -q       Print errors only
    --help, -h        Show this help message
    --version, -V     Show version

ENVIRONMENT VARIABLES:
    GLOSSA_LINT_DIR     Override --dir
    GLOSSA_LINT_RULES   Override --rules
    GLOSSA_LINT_LOG     Override --log

EXIT STATUS:
    0  no error findings
    1  at least one error finding
    2  usage, read or parse failure";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Locale directory to scan.
    pub dir: PathBuf,
    /// Rules file.
    pub rules: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log: String,
    /// Suppress warnings and the success line.
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    MissingValue(&'static str),
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("locales"),
            rules: PathBuf::from("i18n-rules.json"),
            log: "warn".into(),
            quiet: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("glossa-lint {VERSION}");
                process::exit(0);
            }
            Err(ParseError::MissingValue(flag)) => {
                eprintln!("Missing value for {flag}");
                process::exit(2);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(2);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("GLOSSA_LINT_DIR")
            && !val.trim().is_empty()
        {
            opts.dir = PathBuf::from(val);
        }
        if let Some(val) = get_env("GLOSSA_LINT_RULES")
            && !val.trim().is_empty()
        {
            opts.rules = PathBuf::from(val);
        }
        if let Some(val) = get_env("GLOSSA_LINT_LOG")
            && !val.trim().is_empty()
        {
            opts.log = val;
        }

        let mut positional_seen = false;
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--quiet" | "-q" => opts.quiet = true,
                other => {
                    if let Some(val) = other.strip_prefix("--dir=") {
                        opts.dir = PathBuf::from(non_empty(val, "--dir")?);
                    } else if let Some(val) = other.strip_prefix("--rules=") {
                        opts.rules = PathBuf::from(non_empty(val, "--rules")?);
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log = non_empty(val, "--log")?.to_string();
                    } else if !other.starts_with('-') && !positional_seen {
                        opts.dir = PathBuf::from(other);
                        positional_seen = true;
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }
}

fn non_empty<'a>(val: &'a str, flag: &'static str) -> Result<&'a str, ParseError> {
    if val.is_empty() {
        Err(ParseError::MissingValue(flag))
    } else {
        Ok(val)
    }
}
