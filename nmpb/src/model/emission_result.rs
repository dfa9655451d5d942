use super::decibel_ops;
use serde::Serialize;
use std::fmt::Display;

/// emission of one vehicle class on a road segment.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ClassEmission {
    /// sound power level in dB, 0 when the class has no traffic
    pub level: f64,
    /// linear power of `level`, exactly 0 when the class has no traffic
    pub linear_power: f64,
}

impl ClassEmission {
    /// a class with no traffic. its linear power is zero rather than the
    /// 10^(0/10) of a 0 dB source.
    pub const ABSENT: ClassEmission = ClassEmission {
        level: 0.0,
        linear_power: 0.0,
    };

    pub fn from_level(level: f64) -> ClassEmission {
        ClassEmission {
            level,
            linear_power: decibel_ops::level_to_linear(level),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.linear_power == 0.0
    }
}

/// sound power emitted by a road segment, with the contribution of each vehicle class.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct EmissionResult {
    pub light: ClassEmission,
    pub heavy: ClassEmission,
    /// combined sound power level in dB
    pub total_level: f64,
}

impl EmissionResult {
    pub fn new(light: ClassEmission, heavy: ClassEmission) -> EmissionResult {
        let power: f64 = [light, heavy]
            .iter()
            .filter(|class| !class.is_absent())
            .map(|class| class.linear_power)
            .sum();
        let total_level = decibel_ops::linear_to_level(power);
        EmissionResult {
            light,
            heavy,
            total_level,
        }
    }
}

impl Display for EmissionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(light_level={}; heavy_level={}; power={})",
            self.light.level, self.heavy.level, self.total_level
        )
    }
}
