#![forbid(unsafe_code)]

//! `glossa-lint` binary entry point.

use std::io;
use std::process::ExitCode;

use glossa_lint::cli::Opts;
use glossa_lint::{lint_dir, load_rules};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let opts = Opts::parse();

    let filter = EnvFilter::try_new(&opts.log).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let rules = match load_rules(&opts.rules) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("glossa-lint: {err}");
            return ExitCode::from(2);
        }
    };
    tracing::info!(dir = %opts.dir.display(), rules = rules.len(), "linting translations");

    let report = match lint_dir(&opts.dir, &rules) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("glossa-lint: {err}");
            return ExitCode::from(2);
        }
    };

    let printed = if opts.quiet {
        let errors = report.errors_only();
        if errors.findings().is_empty() {
            Ok(())
        } else {
            errors.write_to(&mut io::stdout().lock())
        }
    } else {
        report.write_to(&mut io::stdout().lock())
    };
    if let Err(err) = printed {
        eprintln!("glossa-lint: failed to write report: {err}");
        return ExitCode::from(2);
    }

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        tracing::debug!(errors = report.error_count(), "character count test failed");
        eprintln!("Character count test failed!");
        ExitCode::FAILURE
    }
}
