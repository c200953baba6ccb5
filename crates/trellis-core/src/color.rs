//! Color handling for Trellis topologies
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and [`LinkColor`], the fixed palette used to tint
//! spine/leaf links by their underlay protocol.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use serde::{Serialize, Serializer};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::color::Color;
    ///
    /// let gold = Color::new("#ffd700").unwrap();
    /// let teal = Color::new("teal").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Link tint chosen from the underlay protocol list.
///
/// The palette is closed: a link is gold for EBGP, red for OSPF, teal for
/// ISIS and blue otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LinkColor {
    Gold,
    Red,
    Teal,
    #[default]
    Blue,
}

impl LinkColor {
    /// Picks the link color for a joined protocol string.
    ///
    /// Matching is by substring and the first hit wins, so `EBGP` beats
    /// `OSPF`, which beats `ISIS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::color::LinkColor;
    ///
    /// assert_eq!(LinkColor::from_protocol("EBGP, OSPF"), LinkColor::Gold);
    /// assert_eq!(LinkColor::from_protocol("ISIS"), LinkColor::Teal);
    /// assert_eq!(LinkColor::from_protocol("RIP"), LinkColor::Blue);
    /// ```
    pub fn from_protocol(protocol: &str) -> Self {
        if protocol.contains("EBGP") {
            Self::Gold
        } else if protocol.contains("OSPF") {
            Self::Red
        } else if protocol.contains("ISIS") {
            Self::Teal
        } else {
            Self::Blue
        }
    }

    /// Hex notation of the tint.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Gold => "#ffd700",
            Self::Red => "#ff6b6b",
            Self::Teal => "#4ecdc4",
            Self::Blue => "#90caf9",
        }
    }

    /// The tint as a [`Color`].
    pub fn color(self) -> Color {
        Color::new(self.hex()).expect("link palette entries are valid hex colors")
    }
}

impl fmt::Display for LinkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for LinkColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}
