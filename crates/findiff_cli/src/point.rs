//! Evaluation point parsing.

use std::str::FromStr;

/// Comma-separated coordinates, e.g. `1.0,-2.5,3e-1`.
///
/// An empty string is the zero-dimensional point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point(pub Vec<f64>);

impl Point {
    /// Coordinates as a slice.
    pub fn coordinates(&self) -> &[f64] {
        &self.0
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Point(Vec::new()));
        }

        s.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| format!("invalid coordinate '{}'", part))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Point)
    }
}
