//! Layer classification: distance scales and vertical bands.
//!
//! Both are pure functions of the layer number. Distance scale ranges are
//! contiguous and non-overlapping, so every layer >= 300 maps to exactly one
//! scale.

use serde::{Deserialize, Serialize};

use crate::{LAYER_MIN, LAYER_MAX};

/// Distance scale tier of a layer.
///
/// Each tier fixes the measurement unit and how much real distance one grid
/// cell spans at that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceScale {
    /// Layers 300-305, 16 m per cell
    Terrestrial,
    /// Layers 306-310, 1000 km per cell
    Orbital,
    /// Layers 311-320, 0.1 AU per cell
    Planetary,
    /// Layers 321-350, 1 ly per cell
    Stellar,
    /// Layers 351-400, 100 kly per cell
    Galactic,
    /// Layers 401 and above, 1000 Mly per cell
    Cosmic,
}

impl DistanceScale {
    /// Classify a layer. Layers below 300 have no scale.
    pub fn for_layer(layer: u16) -> Option<Self> {
        match layer {
            0..=299 => None,
            300..=305 => Some(DistanceScale::Terrestrial),
            306..=310 => Some(DistanceScale::Orbital),
            311..=320 => Some(DistanceScale::Planetary),
            321..=350 => Some(DistanceScale::Stellar),
            351..=400 => Some(DistanceScale::Galactic),
            _ => Some(DistanceScale::Cosmic),
        }
    }

    /// Measurement unit for this scale.
    pub fn unit(&self) -> &'static str {
        match self {
            DistanceScale::Terrestrial => "m",
            DistanceScale::Orbital => "km",
            DistanceScale::Planetary => "AU",
            DistanceScale::Stellar => "ly",
            DistanceScale::Galactic => "kly",
            DistanceScale::Cosmic => "Mly",
        }
    }

    /// Real distance spanned by one grid cell, in this scale's unit.
    pub fn cell_distance(&self) -> f64 {
        match self {
            DistanceScale::Terrestrial => 16.0,
            DistanceScale::Orbital => 1000.0,
            DistanceScale::Planetary => 0.1,
            DistanceScale::Stellar => 1.0,
            DistanceScale::Galactic => 100.0,
            DistanceScale::Cosmic => 1000.0,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceScale::Terrestrial => "terrestrial",
            DistanceScale::Orbital => "orbital",
            DistanceScale::Planetary => "planetary",
            DistanceScale::Stellar => "stellar",
            DistanceScale::Galactic => "galactic",
            DistanceScale::Cosmic => "cosmic",
        }
    }

    /// All six tiers, smallest scale first.
    pub fn all() -> [DistanceScale; 6] {
        [
            DistanceScale::Terrestrial,
            DistanceScale::Orbital,
            DistanceScale::Planetary,
            DistanceScale::Stellar,
            DistanceScale::Galactic,
            DistanceScale::Cosmic,
        ]
    }
}

/// Vertical band of a layer within the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Layers 300-499
    Surface,
    /// Layers 500-699
    Underground,
    /// Layers 700-899
    Substrate,
}

impl Band {
    /// Classify a layer. Only layers inside `300..=899` carry a band.
    pub fn for_layer(layer: u16) -> Option<Self> {
        match layer {
            l if !(LAYER_MIN..=LAYER_MAX).contains(&l) => None,
            300..=499 => Some(Band::Surface),
            500..=699 => Some(Band::Underground),
            _ => Some(Band::Substrate),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Surface => "surface",
            Band::Underground => "underground",
            Band::Substrate => "substrate",
        }
    }
}
