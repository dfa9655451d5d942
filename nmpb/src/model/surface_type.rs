use super::{category_ops, EmissionError, PorousCorrectionPolicy};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// road pavement surface. each surface adds a correction to the emission
/// level of every vehicle class.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    #[default]
    Smooth,
    /// porous asphalt, the only speed dependent correction
    Porous,
    /// paving stones
    Stones,
    Cement,
    Corrugated,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 5] = [
        SurfaceType::Smooth,
        SurfaceType::Porous,
        SurfaceType::Stones,
        SurfaceType::Cement,
        SurfaceType::Corrugated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceType::Smooth => "smooth",
            SurfaceType::Porous => "porous",
            SurfaceType::Stones => "stones",
            SurfaceType::Cement => "cement",
            SurfaceType::Corrugated => "corrugated",
        }
    }

    /// additive correction in dB for a vehicle class travelling at `speed_kph`.
    ///
    /// # Arguments
    ///
    /// * `speed_kph` - speed of the vehicle class, only used by porous surfaces
    /// * `policy`    - speed tiers to apply for porous surfaces
    pub fn correction(&self, speed_kph: f64, policy: PorousCorrectionPolicy) -> f64 {
        match self {
            SurfaceType::Smooth => 0.0,
            SurfaceType::Stones => 3.0,
            SurfaceType::Cement | SurfaceType::Corrugated => 2.0,
            SurfaceType::Porous => policy.correction(speed_kph),
        }
    }
}

impl Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SurfaceType {
    type Err = EmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match category_ops::normalize(s).as_str() {
            "smooth" => Ok(SurfaceType::Smooth),
            "porous" => Ok(SurfaceType::Porous),
            "stones" => Ok(SurfaceType::Stones),
            "cement" => Ok(SurfaceType::Cement),
            "corrugated" => Ok(SurfaceType::Corrugated),
            _ => Err(category_ops::invalid_category(
                "surface type",
                s,
                &SurfaceType::ALL,
            )),
        }
    }
}
