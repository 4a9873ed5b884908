// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords and print them, one per line
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH, or 16)
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Draw from the whole printable ASCII range
        #[arg(long, short = 's')]
        has_symbol: bool,

        /// Number of passwords to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },
}
