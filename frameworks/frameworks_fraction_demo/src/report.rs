//! Fraction Report Module
//!
//! Turns parsed arguments into the text the `fraction` binary prints.

use std::fmt;

use entities_fraction::{add, divide, multiply, power, subtract, Fraction, Integer, Power};
use log::{debug, info};

use crate::args::{FractionArgs, Operation};
use crate::error::DemoError;

/// Everything the binary prints about one fraction
#[derive(Debug, Clone, PartialEq)]
pub struct FractionReport {
    pub fraction: Fraction,
    pub mixed: String,
    pub value: f64,
    pub whole_part: Integer,
    pub fractional_part: Fraction,
    pub is_whole: bool,
    pub is_improper: bool,
    pub is_reduced: bool,
    /// `None` for zero
    pub reciprocal: Option<Fraction>,
}

impl FractionReport {
    pub fn new(fraction: &Fraction) -> Self {
        Self {
            fraction: fraction.clone(),
            mixed: fraction.to_mixed_string(),
            value: fraction.value(),
            whole_part: fraction.whole_part(),
            fractional_part: fraction.fractional_part(),
            is_whole: fraction.is_whole(),
            is_improper: fraction.is_improper(),
            is_reduced: fraction.is_reduced(),
            reciprocal: fraction.reciprocal().ok(),
        }
    }
}

impl fmt::Display for FractionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.fraction)?;
        writeln!(f, "  mixed:       {}", self.mixed)?;
        writeln!(f, "  value:       {}", self.value)?;
        writeln!(f, "  whole part:  {}", self.whole_part)?;
        writeln!(f, "  fractional:  {}", self.fractional_part)?;
        writeln!(f, "  whole:       {}", self.is_whole)?;
        writeln!(f, "  improper:    {}", self.is_improper)?;
        writeln!(f, "  reduced:     {}", self.is_reduced)?;
        match &self.reciprocal {
            Some(reciprocal) => write!(f, "  reciprocal:  {}", reciprocal),
            None => write!(f, "  reciprocal:  undefined"),
        }
    }
}

/// Parse every input, reducing it first when `reduce` is set.
pub fn parse_inputs(texts: &[String], reduce: bool) -> Result<Vec<Fraction>, DemoError> {
    texts
        .iter()
        .map(|text| {
            let fraction = Fraction::from_string(text).map_err(|source| DemoError::Input {
                text: text.clone(),
                source,
            })?;
            Ok(if reduce { fraction.reduced() } else { fraction })
        })
        .collect()
}

/// Apply `operation` to one pair of fractions.
pub fn apply(operation: Operation, a: &Fraction, b: &Fraction) -> Result<Fraction, DemoError> {
    let result = match operation {
        Operation::Add => add(a, b)?,
        Operation::Sub => subtract(a, b)?,
        Operation::Mul => multiply(a, b)?,
        Operation::Div => divide(a, b)?,
        Operation::Pow => {
            // A whole exponent is passed as an integer so the result stays exact.
            let powered = if b.is_whole() { power(a, b.whole_part())? } else { power(a, b)? };
            match powered {
                Power::Exact(fraction) => fraction,
                Power::Approximate(_) => {
                    return Err(DemoError::InexactPower { base: a.clone(), exponent: b.clone() })
                }
            }
        }
    };

    debug!("{} {} {} = {}", a, operation.symbol(), b, result);
    Ok(result)
}

/// Fold `fractions` left to right with `operation`.
pub fn fold(operation: Operation, fractions: &[Fraction]) -> Result<Fraction, DemoError> {
    let (first, rest) = fractions
        .split_first()
        .ok_or_else(|| DemoError::Usage("no fractions to combine".to_string()))?;

    rest.iter().try_fold(first.clone(), |acc, next| apply(operation, &acc, next))
}

/// Build the full output for one invocation.
pub fn run(args: &FractionArgs) -> Result<String, DemoError> {
    args.validate().map_err(DemoError::Usage)?;
    let fractions = parse_inputs(&args.fractions, args.reduce)?;
    info!("read {} fraction(s)", fractions.len());

    let Some(operation) = args.op else {
        let reports: Vec<String> = fractions
            .iter()
            .map(|fraction| FractionReport::new(fraction).to_string())
            .collect();
        return Ok(reports.join("\n\n"));
    };

    let result = fold(operation, &fractions)?;
    let expression: Vec<String> = fractions.iter().map(|fraction| fraction.to_string()).collect();

    Ok(format!(
        "{} = {}\n\n{}",
        expression.join(&format!(" {} ", operation.symbol())),
        result,
        FractionReport::new(&result)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use entities_fraction::FractionError;

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let report = FractionReport::new(&frac(-7, 3));
        assert_eq!(report.mixed, "-3 2/3");
        assert_eq!(report.whole_part, -3);
        assert_eq!(report.fractional_part, frac(2, 3));
        assert!(report.is_improper);
        assert!(!report.is_whole);
        assert_eq!(report.reciprocal, Some(frac(-3, 7)));
    }

    #[test]
    fn test_report_of_zero() {
        let report = FractionReport::new(&Fraction::ZERO);
        assert_eq!(report.reciprocal, None);
        assert!(report.to_string().ends_with("reciprocal:  undefined"));
    }

    #[test]
    fn test_parse_inputs_reduce() {
        let texts = vec!["4/8".to_string(), "2 1/3".to_string()];
        let plain = parse_inputs(&texts, false).unwrap();
        assert!(plain[0].strictly_equals(&frac(4, 8)));

        let reduced = parse_inputs(&texts, true).unwrap();
        assert!(reduced[0].strictly_equals(&frac(1, 2)));
        assert!(reduced[1].strictly_equals(&frac(7, 3)));
    }

    #[test]
    fn test_parse_inputs_reports_text() {
        let err = parse_inputs(&["1/x".to_string()], false).unwrap_err();
        assert!(matches!(err, DemoError::Input { ref text, .. } if text == "1/x"));
    }

    #[test]
    fn test_fold_operations() {
        let inputs = [frac(1, 2), frac(1, 3), frac(1, 6)];
        assert_eq!(fold(Operation::Add, &inputs).unwrap(), frac(1, 1));
        assert_eq!(fold(Operation::Sub, &inputs).unwrap(), frac(0, 1));
        assert_eq!(fold(Operation::Mul, &inputs).unwrap(), frac(1, 36));
        assert_eq!(fold(Operation::Div, &inputs).unwrap(), frac(9, 1));
    }

    #[test]
    fn test_fold_power() {
        assert_eq!(fold(Operation::Pow, &[frac(2, 3), frac(2, 1)]).unwrap(), frac(4, 9));
        assert_eq!(fold(Operation::Pow, &[frac(2, 3), frac(-4, 2)]).unwrap(), frac(9, 4));
        assert!(matches!(
            fold(Operation::Pow, &[frac(4, 1), frac(1, 2)]),
            Err(DemoError::InexactPower { .. })
        ));
    }

    #[test]
    fn test_fold_errors() {
        assert_eq!(
            fold(Operation::Div, &[frac(1, 2), Fraction::ZERO]),
            Err(DemoError::Fraction(FractionError::DivisionByZero))
        );
        assert!(matches!(fold(Operation::Add, &[]), Err(DemoError::Usage(_))));
    }

    #[test]
    fn test_run_single_report() {
        let args = FractionArgs::parse_from(["fraction", "4/8"]);
        let output = run(&args).unwrap();
        assert!(output.starts_with("4/8\n"));
        assert!(output.contains("  value:       0.5\n"));
        assert!(output.contains("  reduced:     false\n"));
        assert!(output.contains("  reciprocal:  2"));
    }

    #[test]
    fn test_run_operation() {
        let args = FractionArgs::parse_from(["fraction", "--op", "add", "1/2", "1/3"]);
        let output = run(&args).unwrap();
        assert!(output.starts_with("1/2 + 1/3 = 5/6\n\n5/6\n"));
    }

    #[test]
    fn test_run_beyond_i64() {
        let args = FractionArgs::parse_from([
            "fraction",
            "--op",
            "mul",
            "9223372036854775807",
            "4",
        ]);
        let output = run(&args).unwrap();
        assert!(output.starts_with("9223372036854775807 * 4 = 36893488147419103228
"));
    }

    #[test]
    fn test_run_usage_error() {
        let args = FractionArgs::parse_from(["fraction", "--op", "add", "1/2"]);
        assert!(matches!(run(&args), Err(DemoError::Usage(_))));
    }
}
