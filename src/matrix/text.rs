//! Text format and table rendering.
//!
//! One row per line, whitespace-delimited. The token `inf` (any case)
//! is a missing edge. Blank lines are skipped.
//!
//! ```text
//! 0   10  15  inf
//! 10  0   35  25
//! 15  35  0   30
//! 20  25  30  0
//! ```

use super::AdjacencyMatrix;
use crate::error::MatrixError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

impl FromStr for AdjacencyMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(col, token)| {
                    parse_cost(token).ok_or_else(|| MatrixError::InvalidToken {
                        line: line_no + 1,
                        column: col + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(row);
        }
        AdjacencyMatrix::from_rows(rows)
    }
}

fn parse_cost(token: &str) -> Option<f64> {
    if token.eq_ignore_ascii_case("inf") {
        return Some(f64::INFINITY);
    }
    token.parse::<f64>().ok()
}

impl AdjacencyMatrix {
    /// Reads a matrix from a text file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MatrixError> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}

/// Renders the matrix as a table with 1-based row and column labels.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        write!(f, "     |")?;
        for j in 1..=n {
            write!(f, " {j:5} |")?;
        }
        writeln!(f)?;
        writeln!(f, "-----+{}", "-------+".repeat(n))?;
        for i in 0..n {
            write!(f, " {:3} |", i + 1)?;
            for &value in self.row(i) {
                let cell = if value.is_infinite() {
                    "inf".to_string()
                } else {
                    format!("{value:.1}")
                };
                write!(f, " {cell:>5} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
