//! Robot colors, target symbols and target specifications.

use std::fmt;

use crate::error::{Error, Result};

/// Robot colors in their fixed packing order.
///
/// The discriminant is the robot index inside a packed state: a puzzle
/// without the silver robot packs indices 0..4, one with it packs 0..5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    Silver = 4,
}

impl Color {
    /// All colors in packing order.
    pub const ALL: [Color; 5] = [
        Color::Yellow,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Silver,
    ];

    /// Robot index inside a packed state.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Color::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is 5 or larger.
    pub fn from_index(index: usize) -> Color {
        Color::ALL[index]
    }

    /// Lowercase name as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Silver => "silver",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target symbols printed on the board.
///
/// `Cosmic` is the wildcard: it appears once per board and any robot color
/// may satisfy it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Pyramid,
    Star,
    Moon,
    Saturn,
    Cosmic,
}

impl Symbol {
    /// Lowercase name as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Pyramid => "pyramid",
            Symbol::Star => "star",
            Symbol::Moon => "moon",
            Symbol::Saturn => "saturn",
            Symbol::Cosmic => "cosmic",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A goal specification: which symbol to reach, and with which robot.
///
/// For the cosmic wildcard the color is `None` and any robot satisfies the
/// target. For every other symbol the color names the robot that has to
/// reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub symbol: Symbol,
    pub color: Option<Color>,
}

impl Target {
    /// Creates a colored target.
    ///
    /// Silver has no targets of its own; asking for one is an input error.
    pub fn colored(symbol: Symbol, color: Color) -> Result<Target> {
        if symbol == Symbol::Cosmic {
            return Err(Error::InvalidTarget(
                "the cosmic target carries no color".into(),
            ));
        }
        if color == Color::Silver {
            return Err(Error::InvalidTarget(
                "no silver targets exist on any tile".into(),
            ));
        }
        Ok(Target {
            symbol,
            color: Some(color),
        })
    }

    /// Creates the cosmic wildcard target.
    pub const fn cosmic() -> Target {
        Target {
            symbol: Symbol::Cosmic,
            color: None,
        }
    }

    /// Returns true for the wildcard target.
    pub const fn is_cosmic(&self) -> bool {
        self.color.is_none()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}-{}", color, self.symbol),
            None => f.write_str("cosmic"),
        }
    }
}
