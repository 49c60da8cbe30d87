//! greeter CLI - prints a greeting for an optional name
//!
//! The first argument is the name; further arguments are ignored. Builds with
//! the `foreign` feature also print the line supplied by the foreign greeter.

#![forbid(unsafe_code)]

mod cli;
mod error;
mod logging;

use std::io::{self, Write};

use clap::Parser;
use greeter_core::{greet_with, ForeignGreeter, StaticGreeter};
use tracing::debug;

use cli::Cli;
use error::{exit_codes, CliError};

fn run<W: Write>(
    cli: &Cli,
    foreign: Option<&dyn ForeignGreeter>,
    out: &mut W,
) -> Result<i32, CliError> {
    let name = cli.name();
    debug!(name, ignored = cli.rest.len(), "resolved name");
    debug!(foreign = foreign.is_some(), "foreign greeter");

    let lines = greet_with(name, foreign);
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(feature = "foreign")]
#[allow(clippy::unnecessary_wraps)]
fn foreign_greeter() -> Option<StaticGreeter> {
    Some(StaticGreeter::default())
}

#[cfg(not(feature = "foreign"))]
fn foreign_greeter() -> Option<StaticGreeter> {
    None
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init() {
        eprintln!("greeter: diagnostics disabled: {e}");
    }

    let foreign = foreign_greeter();
    let stdout = io::stdout();
    let exit_code = match run(
        &cli,
        foreign.as_ref().map(|f| f as &dyn ForeignGreeter),
        &mut stdout.lock(),
    ) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("greeter: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("greeter").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn output_with(args: &[&str], foreign: Option<&dyn ForeignGreeter>) -> String {
        let mut out = Vec::new();
        let code = run(&parse(args), foreign, &mut out).expect("run should succeed");
        assert_eq!(code, exit_codes::SUCCESS);
        String::from_utf8(out).expect("output is utf-8")
    }

    fn output(args: &[&str]) -> String {
        output_with(args, None)
    }

    #[rstest]
    #[case::no_argument(&[], "Hello, there\n")]
    #[case::named(&["Damien"], "Hello, Damien\n")]
    #[case::extra_ignored(&["Damien", "extra"], "Hello, Damien\n")]
    #[case::extra_short_flag(&["Damien", "-x"], "Hello, Damien\n")]
    #[case::extra_long_flag(&["Damien", "--unknown"], "Hello, Damien\n")]
    #[case::leading_dash(&["-Damien"], "Hello, -Damien\n")]
    #[case::flag_lookalike(&["--foreign"], "Hello, --foreign\n")]
    #[case::spaces(&["  "], "Hello,   \n")]
    #[case::non_ascii(&["Amélie"], "Hello, Amélie\n")]
    fn prints_greeting(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(output(args), expected);
    }

    #[test]
    fn foreign_line_is_appended() {
        let foreign = StaticGreeter::default();
        assert_eq!(
            output_with(&["Damien"], Some(&foreign)),
            "Hello, Damien\nHi from Go\n"
        );
    }

    #[test]
    fn write_failure_maps_to_error_exit() {
        let err = run(&parse(&[]), None, &mut BrokenPipe).expect_err("write should fail");
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), exit_codes::ERROR);
        assert!(err.to_string().starts_with("failed to write greeting"));
    }
}
