use super::{category_ops, EmissionError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// longitudinal slope of the road in the direction of traffic.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoadSlope {
    #[default]
    Flat,
    Down,
    Up,
}

impl RoadSlope {
    pub const ALL: [RoadSlope; 3] = [RoadSlope::Flat, RoadSlope::Down, RoadSlope::Up];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadSlope::Flat => "flat",
            RoadSlope::Down => "down",
            RoadSlope::Up => "up",
        }
    }
}

impl Display for RoadSlope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoadSlope {
    type Err = EmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match category_ops::normalize(s).as_str() {
            "flat" => Ok(RoadSlope::Flat),
            "down" => Ok(RoadSlope::Down),
            "up" => Ok(RoadSlope::Up),
            _ => Err(category_ops::invalid_category("slope", s, &RoadSlope::ALL)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RoadSlope;

    #[test]
    fn parse_slope() {
        assert_eq!("UP".parse::<RoadSlope>(), Ok(RoadSlope::Up));
        assert_eq!(" down".parse::<RoadSlope>(), Ok(RoadSlope::Down));
        let error = "steep".parse::<RoadSlope>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid slope 'steep', expected one of: flat, down, up"
        );
    }
}
