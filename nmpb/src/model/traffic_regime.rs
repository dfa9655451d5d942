use super::{category_ops, EmissionError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// flow character of the vehicles on a road segment. together with the slope,
/// the regime selects the emission coefficient table of each vehicle class.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrafficRegime {
    /// fluid flow at a roughly constant speed
    #[default]
    #[serde(alias = "continuos")]
    Continuous,
    /// stop-and-go flow where vehicles are mostly accelerating,
    /// such as leaving an intersection or a toll barrier
    #[serde(alias = "pulsed accelerated", alias = "pulsed-accelerated")]
    PulsedAccelerated,
    /// stop-and-go flow where vehicles are mostly decelerating,
    /// such as approaching an intersection
    #[serde(alias = "pulsed decelerated", alias = "pulsed-decelerated")]
    PulsedDecelerated,
    /// stop-and-go flow with no dominant acceleration phase
    #[serde(
        alias = "non-differentiated pulsed",
        alias = "non-differentiated-pulsed"
    )]
    NonDifferentiatedPulsed,
}

impl TrafficRegime {
    pub const ALL: [TrafficRegime; 4] = [
        TrafficRegime::Continuous,
        TrafficRegime::PulsedAccelerated,
        TrafficRegime::PulsedDecelerated,
        TrafficRegime::NonDifferentiatedPulsed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficRegime::Continuous => "continuous",
            TrafficRegime::PulsedAccelerated => "pulsed_accelerated",
            TrafficRegime::PulsedDecelerated => "pulsed_decelerated",
            TrafficRegime::NonDifferentiatedPulsed => "non_differentiated_pulsed",
        }
    }
}

impl Display for TrafficRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrafficRegime {
    type Err = EmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match category_ops::normalize(s).as_str() {
            // "continuos" is a common misspelling in existing traffic datasets
            "continuous" | "continuos" => Ok(TrafficRegime::Continuous),
            "pulsed_accelerated" => Ok(TrafficRegime::PulsedAccelerated),
            "pulsed_decelerated" => Ok(TrafficRegime::PulsedDecelerated),
            "non_differentiated_pulsed" => Ok(TrafficRegime::NonDifferentiatedPulsed),
            _ => Err(category_ops::invalid_category(
                "traffic regime",
                s,
                &TrafficRegime::ALL,
            )),
        }
    }
}
