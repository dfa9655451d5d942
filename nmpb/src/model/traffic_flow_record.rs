use super::{RoadSlope, SurfaceType, TrafficRegime, VehicleClass};
use std::fmt::Display;

/// traffic on a road segment for one calculation period. counts are in
/// vehicles per hour and speeds in km/h. a missing value disables the
/// contribution of its vehicle class, the same as a non-positive one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrafficFlowRecord {
    pub light_count: Option<f64>,
    pub heavy_count: Option<f64>,
    pub light_speed: Option<f64>,
    pub heavy_speed: Option<f64>,
    pub traffic_regime: TrafficRegime,
    pub surface_type: SurfaceType,
    pub slope: RoadSlope,
}

/// count and speed of a single vehicle class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFlow {
    pub count: Option<f64>,
    pub speed: Option<f64>,
}

impl VehicleFlow {
    /// count and speed of this flow when both are positive, otherwise None,
    /// meaning the class emits nothing. NaN values are treated as missing.
    pub fn active(&self) -> Option<(f64, f64)> {
        match (self.count, self.speed) {
            (Some(count), Some(speed)) if count > 0.0 && speed > 0.0 => Some((count, speed)),
            _ => None,
        }
    }
}

impl TrafficFlowRecord {
    /// a record with no traffic on a road with the given attributes
    pub fn new(
        traffic_regime: TrafficRegime,
        surface_type: SurfaceType,
        slope: RoadSlope,
    ) -> TrafficFlowRecord {
        TrafficFlowRecord {
            traffic_regime,
            surface_type,
            slope,
            ..Default::default()
        }
    }

    pub fn with_light(self, count: f64, speed_kph: f64) -> TrafficFlowRecord {
        TrafficFlowRecord {
            light_count: Some(count),
            light_speed: Some(speed_kph),
            ..self
        }
    }

    pub fn with_heavy(self, count: f64, speed_kph: f64) -> TrafficFlowRecord {
        TrafficFlowRecord {
            heavy_count: Some(count),
            heavy_speed: Some(speed_kph),
            ..self
        }
    }

    pub fn flow(&self, class: VehicleClass) -> VehicleFlow {
        match class {
            VehicleClass::Light => VehicleFlow {
                count: self.light_count,
                speed: self.light_speed,
            },
            VehicleClass::Heavy => VehicleFlow {
                count: self.heavy_count,
                speed: self.heavy_speed,
            },
        }
    }
}

fn fmt_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from("none"),
    }
}

impl Display for TrafficFlowRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(light_count={}; heavy_count={}; light_speed={}; heavy_speed={}; slope={}; traffic_regime={}; surface_type={})",
            fmt_optional(self.light_count),
            fmt_optional(self.heavy_count),
            fmt_optional(self.light_speed),
            fmt_optional(self.heavy_speed),
            self.slope,
            self.traffic_regime,
            self.surface_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_activity() {
        let record = TrafficFlowRecord::default()
            .with_light(100.0, 50.0)
            .with_heavy(10.0, 0.0);
        assert_eq!(
            record.flow(VehicleClass::Light).active(),
            Some((100.0, 50.0))
        );
        assert_eq!(record.flow(VehicleClass::Heavy).active(), None);

        let missing_speed = VehicleFlow {
            count: Some(20.0),
            speed: None,
        };
        assert_eq!(missing_speed.active(), None);
        let nan_count = VehicleFlow {
            count: Some(f64::NAN),
            speed: Some(50.0),
        };
        assert_eq!(nan_count.active(), None);
    }

    #[test]
    fn describe_record() {
        let record = TrafficFlowRecord::new(
            TrafficRegime::PulsedAccelerated,
            SurfaceType::Porous,
            RoadSlope::Up,
        )
        .with_light(250.0, 45.5);
        assert_eq!(
            record.to_string(),
            "(light_count=250; heavy_count=none; light_speed=45.5; heavy_speed=none; slope=up; traffic_regime=pulsed_accelerated; surface_type=porous)"
        );
    }
}
