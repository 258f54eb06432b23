//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use clap::{Parser, ValueEnum};

/// Fraction demonstration command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fraction")]
#[command(about = "Inspect and combine exact fractions")]
pub struct FractionArgs {
    /// Reduce every input to lowest terms before use
    #[arg(long)]
    pub reduce: bool,

    /// Fold all inputs left to right with one operation
    #[arg(long, value_enum)]
    pub op: Option<Operation>,

    /// Fractions to inspect: "3/4", "-2", or a quoted mixed number "1 1/2"
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub fractions: Vec<String>,
}

/// Binary operation applied by `--op`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Pow => "^",
        }
    }
}

impl FractionArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(op) = self.op {
            if self.fractions.len() < 2 {
                return Err(format!("--op {} needs at least two fractions", op.symbol()));
            }
        }

        Ok(())
    }
}
