/// The contents of one board cell, doubling as a player color.
///
/// `Dark` moves first. `Empty` only ever appears as a cell state;
/// functions taking a player color expect `Dark` or `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Dark,
    Light,
}

impl Disc {
    /// Returns the display character: `'X'` for dark, `'O'` for light,
    /// `'-'` for an empty cell.
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Dark => 'X',
            Disc::Light => 'O',
        }
    }

    /// Returns the opposing color. `Empty` has no opponent and maps to
    /// itself.
    pub fn opposite(&self) -> Disc {
        match self {
            Disc::Dark => Disc::Light,
            Disc::Light => Disc::Dark,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Converts a protocol cell digit into a disc.
    ///
    /// The match protocol encodes cells as `0` (empty), `1` (dark)
    /// and `2` (light).
    ///
    /// # Arguments
    /// * `digit` - The cell digit to convert.
    ///
    /// # Returns
    /// `Some(Disc)` for a valid digit, `None` otherwise.
    pub fn from_digit(digit: u8) -> Option<Disc> {
        match digit {
            0 => Some(Disc::Empty),
            1 => Some(Disc::Dark),
            2 => Some(Disc::Light),
            _ => None,
        }
    }

    /// Converts the disc to its protocol cell digit.
    pub fn to_digit(self) -> u8 {
        match self {
            Disc::Empty => 0,
            Disc::Dark => 1,
            Disc::Light => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Disc::Dark.opposite(), Disc::Light);
        assert_eq!(Disc::Light.opposite(), Disc::Dark);
        assert_eq!(Disc::Empty.opposite(), Disc::Empty);
    }

    #[test]
    fn test_digit_round_trip() {
        for disc in [Disc::Empty, Disc::Dark, Disc::Light] {
            assert_eq!(Disc::from_digit(disc.to_digit()), Some(disc));
        }
        assert_eq!(Disc::from_digit(3), None);
    }
}
