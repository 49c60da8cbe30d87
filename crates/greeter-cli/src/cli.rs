//! Command-line argument definitions.
//!
//! The first argument is always the name, taken verbatim. Nothing is parsed
//! as a flag, so `greeter --help` greets `--help`.

use clap::Parser;

/// Prints a greeting.
#[derive(Debug, Parser)]
#[command(name = "greeter", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Name to greet. Omit it to be greeted anonymously.
    #[arg(allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Extra arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// The name handed to the greeter: the first argument, or empty.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
