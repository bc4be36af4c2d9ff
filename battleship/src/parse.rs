//! Parsing of the text the players type: squares like `B7` and orientation codes.

use once_cell::sync::Lazy;
use regex::Regex;

use navalcombat::{Coordinate, Orientation};

/// Matcher for a square: row letter `A`-`J` followed by column `1`-`10`.
static SQUARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<row>[A-J])(?P<col>10|[1-9])$").unwrap());

/// Parse a square such as `A1` or `J10` into a zero-based [`Coordinate`]. Surrounding
/// whitespace is ignored; anything else off the grid is rejected.
pub fn parse_square(input: &str) -> Option<Coordinate> {
    let captures = SQUARE.captures(input.trim())?;
    let row = captures.name("row")?.as_str().as_bytes()[0] - b'A';
    let col: usize = captures.name("col")?.as_str().parse().ok()?;
    Some(Coordinate::new(row as usize, col - 1))
}

/// Format a [`Coordinate`] the way players type it.
pub fn format_square(coord: Coordinate) -> String {
    format!("{}{}", (b'A' + coord.row as u8) as char, coord.col + 1)
}

/// Parse an orientation code: `H`, `V`, `DD` (diagonal down) or `DU` (diagonal up).
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim() {
        "H" => Some(Orientation::Horizontal),
        "V" => Some(Orientation::Vertical),
        "DD" => Some(Orientation::DiagonalDown),
        "DU" => Some(Orientation::DiagonalUp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        assert_eq!(parse_square("A1"), Some(Coordinate::new(0, 0)));
        assert_eq!(parse_square("A10"), Some(Coordinate::new(0, 9)));
        assert_eq!(parse_square("J1"), Some(Coordinate::new(9, 0)));
        assert_eq!(parse_square(" J10\n"), Some(Coordinate::new(9, 9)));
    }

    #[test]
    fn off_grid_squares() {
        for input in &["", "A", "K1", "A0", "A11", "a1", "1A", "AA1", "B 2", "C01", "J100"] {
            assert_eq!(parse_square(input), None, "{:?}", input);
        }
    }

    #[test]
    fn squares_format_back() {
        for &square in &["A1", "E5", "J10", "C10"] {
            assert_eq!(format_square(parse_square(square).unwrap()), square);
        }
    }

    #[test]
    fn orientations() {
        assert_eq!(parse_orientation("H"), Some(Orientation::Horizontal));
        assert_eq!(parse_orientation("V"), Some(Orientation::Vertical));
        assert_eq!(parse_orientation("DD"), Some(Orientation::DiagonalDown));
        assert_eq!(parse_orientation("DU "), Some(Orientation::DiagonalUp));
        assert_eq!(parse_orientation("h"), None);
        assert_eq!(parse_orientation("D"), None);
        assert_eq!(parse_orientation("UD"), None);
    }
}
