use serde::{Deserialize, Serialize};

/// speed tiers applied to the porous asphalt surface correction.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PorousCorrectionPolicy {
    /// -1 dB up to 60 km/h, -2 dB up to 80 km/h, -3 dB above.
    #[default]
    Tiered,
    /// -1 dB up to 60 km/h and -2 dB above, never reaching the -3 dB tier.
    /// use to reproduce historical results computed without the high speed tier.
    Legacy,
}

impl PorousCorrectionPolicy {
    /// correction in dB for porous asphalt at the given speed in km/h
    pub fn correction(&self, speed_kph: f64) -> f64 {
        match self {
            PorousCorrectionPolicy::Tiered => {
                if speed_kph <= 60.0 {
                    -1.0
                } else if speed_kph <= 80.0 {
                    -2.0
                } else {
                    -3.0
                }
            }
            PorousCorrectionPolicy::Legacy => {
                if speed_kph <= 60.0 {
                    -1.0
                } else {
                    -2.0
                }
            }
        }
    }
}
