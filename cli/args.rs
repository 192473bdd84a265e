use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "sdstats",
    version,
    about = "Mean, standard deviation, SD bands and coefficient of variation of a sample"
)]
pub struct Args {
    /// Sample values. Commas, semicolons and whitespace separate values.
    /// Negative numbers are accepted; other hyphenated tokens go after `--`.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,
    /// Read values from a file ("-" for stdin). May be repeated.
    #[arg(short, long, value_name = "PATH")]
    pub file: Vec<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
    /// Decimal places in table and CSV output.
    #[arg(short, long, default_value_t = 4)]
    pub precision: usize,
    /// Also write the CSV report to this path.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
    /// Fail if any input token is not a number.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Increases the level of verbosity (the max level is -vvv).
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
    Csv,
}
