use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid height, width, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`, row-major.
pub type Coord2 = (Coord, Coord);

/// Clue numbers are positive and unique only within a [`Direction`].
pub type ClueNumber = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        use Direction::*;
        match self {
            Across => "across",
            Down => "down",
        }
    }

    /// Name of the data attribute tagging grid cells with this direction's clue number.
    pub const fn cell_attr(self) -> &'static str {
        use Direction::*;
        match self {
            Across => "data-across-number",
            Down => "data-down-number",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection;

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim() {
            "across" => Ok(Self::Across),
            "down" => Ok(Self::Down),
            _ => Err(UnknownDirection),
        }
    }
}

/// Parses a clue number attribute, treating empty, zero, or garbage as absent.
pub fn parse_clue_number(raw: &str) -> Option<ClueNumber> {
    raw.trim().parse().ok().filter(|&number: &ClueNumber| number > 0)
}

/// Identity of a clue: its direction plus its number within that direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClueRef {
    pub direction: Direction,
    pub number: ClueNumber,
}

impl ClueRef {
    pub const fn new(direction: Direction, number: ClueNumber) -> Self {
        Self { direction, number }
    }

    pub const fn across(number: ClueNumber) -> Self {
        Self::new(Direction::Across, number)
    }

    pub const fn down(number: ClueNumber) -> Self {
        Self::new(Direction::Down, number)
    }

    /// Builds a reference from raw `data-direction` / `data-clue-number` attribute values.
    pub fn parse(direction: &str, number: &str) -> Option<Self> {
        let direction = direction.parse().ok()?;
        let number = parse_clue_number(number)?;
        Some(Self { direction, number })
    }
}

impl fmt::Display for ClueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_number_rejects_falsy_values() {
        assert_eq!(parse_clue_number("4"), Some(4));
        assert_eq!(parse_clue_number(" 12 "), Some(12));
        assert_eq!(parse_clue_number(""), None);
        assert_eq!(parse_clue_number("0"), None);
        assert_eq!(parse_clue_number("four"), None);
    }

    #[test]
    fn clue_ref_parses_attribute_pairs() {
        assert_eq!(ClueRef::parse("across", "4"), Some(ClueRef::across(4)));
        assert_eq!(ClueRef::parse("down", "7"), Some(ClueRef::down(7)));
        assert_eq!(ClueRef::parse("diagonal", "7"), None);
        assert_eq!(ClueRef::parse("down", ""), None);
    }
}
