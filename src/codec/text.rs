// src/codec/text.rs
//! Text form of a matrix: one row per line, decimal numbers in between.
//!
//! The reader tokenizes each line with a "decimal number, optionally
//! signed, `.` or `,` as the fractional separator" scan and ignores
//! anything between tokens. The writer always renders with `.`.

use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Pull every decimal-number token out of one line.
fn scan_numbers(line: &str) -> Vec<f64> {
    let bytes = line.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let signed = (bytes[i] == b'+' || bytes[i] == b'-')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_digit();
        if !bytes[i].is_ascii_digit() && !signed {
            i += 1;
            continue;
        }
        let start = i;
        if signed {
            i += 1;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len()
            && (bytes[i] == b'.' || bytes[i] == b',')
            && bytes[i + 1].is_ascii_digit()
        {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        let token = line[start..i].replace(',', ".");
        if let Ok(value) = token.parse::<f64>() {
            numbers.push(value);
        }
    }
    numbers
}

impl Matrix {
    /// Parse a matrix from its text form.
    ///
    /// Empty lines are skipped; every remaining line must yield the same
    /// number of tokens, else the input is rejected as malformed.
    pub fn parse(text: &str) -> Result<Matrix, MatrixError> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let numbers = scan_numbers(line);
            if let Some(first) = rows.first() {
                if numbers.len() != first.len() {
                    return Err(MatrixError::MalformedInput(format!(
                        "line {} has {} numbers, expected {}",
                        index + 1,
                        numbers.len(),
                        first.len()
                    )));
                }
            }
            rows.push(numbers);
        }
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatrixError::MalformedInput(
                "input contains no numeric rows".into(),
            ));
        }
        Ok(Matrix::from_rows(&rows))
    }

    /// Render the matrix as parseable text, values space-separated and
    /// one row per line. `digits` fixes the decimal places; `None`
    /// prints the shortest representation that round-trips.
    pub fn to_text(&self, digits: Option<usize>) -> String {
        let mut out = String::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if x > 0 {
                    out.push(' ');
                }
                let value = self.get(x, y);
                match digits {
                    Some(digits) => out.push_str(&format!("{:.*}", digits, value)),
                    None => out.push_str(&format!("{}", value)),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(None))
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matrix::parse(s)
    }
}
