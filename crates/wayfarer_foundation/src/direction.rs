//! The closed set of movement directions.

use std::fmt;

/// One of the twelve directions a location may connect through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `n`
    North,
    /// `ne`
    NorthEast,
    /// `e`
    East,
    /// `se`
    SouthEast,
    /// `s`
    South,
    /// `sw`
    SouthWest,
    /// `w`
    West,
    /// `nw`
    NorthWest,
    /// `u`
    Up,
    /// `d`
    Down,
    /// `i`
    In,
    /// `o`
    Out,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 12;

    /// All directions in declaration order.
    pub const ALL: [Direction; Self::COUNT] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::Up,
        Self::Down,
        Self::In,
        Self::Out,
    ];

    /// Returns the short keyword used for this direction in game definitions.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
            Self::Up => "u",
            Self::Down => "d",
            Self::In => "i",
            Self::Out => "o",
        }
    }

    /// Returns the full lowercase name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::East => "east",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::West => "west",
            Self::NorthWest => "northwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }

    /// Returns the position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a direction by its exact definition keyword (`n`, `se`, `u`...).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.keyword() == keyword)
    }

    /// Looks up a direction by keyword or full name, ignoring case.
    ///
    /// Used for player input, where `N`, `north` and `North` all mean the same.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| {
            d.keyword().eq_ignore_ascii_case(word) || d.name().eq_ignore_ascii_case(word)
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
