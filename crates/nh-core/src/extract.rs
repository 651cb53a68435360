//! Numeric token extraction from an input stream.
//!
//! A token is a maximal run of non-whitespace characters. Each token
//! is classified by a two-stage parse: integer first, float second.
//! Anything else is non-numeric and skipped (optionally reported).

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::Result;

/// Classification of a single whitespace-delimited token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Valid signed integer literal (no decimal point or exponent).
    Int(i64),
    /// Valid float literal, or an integer too wide for `i64`.
    Float(f64),
    /// Neither.
    NonNumeric,
}

impl Token {
    /// Numeric value normalized to `f64`, if any.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Token::Int(v) => Some(v as f64),
            Token::Float(v) => Some(v),
            Token::NonNumeric => None,
        }
    }
}

/// Classify one token. Integers wider than `i64` fall through to the
/// float parse and promote silently.
pub fn classify(token: &str) -> Token {
    match token.parse::<i64>() {
        Ok(v) => Token::Int(v),
        Err(_) => match token.parse::<f64>() {
            Ok(v) => Token::Float(v),
            Err(_) => Token::NonNumeric,
        },
    }
}

/// Exhaust `input` and return every numeric sample in encounter order,
/// normalized to `f64`.
///
/// When `print_numbers` is set, each recognized token's original text
/// is echoed to `echo_out` at recognition time. When
/// `report_non_numeric` is set, each non-numeric token produces one
/// diagnostic line on `report_err`.
pub fn extract_samples<R: BufRead, W1: Write, W2: Write>(
    input: R,
    config: &Config,
    echo_out: &mut W1,
    report_err: &mut W2,
) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match classify(token).value() {
                Some(value) => {
                    samples.push(value);
                    if config.print_numbers {
                        writeln!(echo_out, "{token}")?;
                    }
                }
                None => {
                    if config.report_non_numeric {
                        writeln!(report_err, "Non-numeric {token:?} found.")?;
                    }
                }
            }
        }
    }

    tracing::debug!(samples = samples.len(), "input exhausted");
    Ok(samples)
}
