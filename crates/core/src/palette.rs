//! Accent color palette
//!
//! Five fixed entries, each a hex string for `--primary-color` /
//! `--highlight-color` and an RGB triplet for `--primary-color-rgb`.

use std::fmt;
use std::str::FromStr;

use crate::error::{PortfolioError, Result};

/// Accent color choices offered by the color buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Blue,
    Pink,
    Orange,
    Red,
    Purple,
}

impl ColorKey {
    pub const ALL: [Self; 5] = [Self::Blue, Self::Pink, Self::Orange, Self::Red, Self::Purple];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
        }
    }

    pub const fn swatch(self) -> Swatch {
        match self {
            Self::Blue => Swatch::new("#007bff", [0, 123, 255]),
            Self::Pink => Swatch::new("#e83e8c", [232, 62, 140]),
            Self::Orange => Swatch::new("#fd7e14", [253, 126, 20]),
            Self::Red => Swatch::new("#dc3545", [220, 53, 69]),
            Self::Purple => Swatch::new("#6f42c1", [111, 66, 193]),
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown color names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor;

impl FromStr for ColorKey {
    type Err = UnknownColor;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(UnknownColor)
    }
}

/// Display color for one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub hex: &'static str,
    pub rgb: [u8; 3],
}

impl Swatch {
    const fn new(hex: &'static str, rgb: [u8; 3]) -> Self {
        Self { hex, rgb }
    }

    /// `"r, g, b"`, the form used inside `rgba(var(--primary-color-rgb), a)`.
    pub fn rgb_triplet(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("{r}, {g}, {b}")
    }
}

/// Look up a palette entry by its button value.
pub fn lookup(key: &str) -> Option<Swatch> {
    key.parse::<ColorKey>().ok().map(ColorKey::swatch)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Check every entry's hex string against its triplet.
pub fn validate() -> Result<()> {
    for key in ColorKey::ALL {
        let swatch = key.swatch();
        let parsed = parse_hex(swatch.hex).ok_or(PortfolioError::MalformedHex {
            key: key.as_str(),
            hex: swatch.hex,
        })?;
        if parsed != swatch.rgb {
            return Err(PortfolioError::RgbMismatch {
                key: key.as_str(),
                hex: swatch.hex,
                rgb: swatch.rgb_triplet(),
            });
        }
    }
    Ok(())
}
