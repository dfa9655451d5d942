use super::{
    coefficients, ClassEmission, EmissionError, EmissionResult, PorousCorrectionPolicy, RoadSlope,
    SurfaceType, TrafficFlowRecord, TrafficRegime, VehicleClass,
};
use crate::config::EmissionModelConfig;

/// reference speed v₀ of the regression, in km/h
pub const REFERENCE_SPEED_KPH: f64 = 20.0;

/// evaluates the sound power level of road traffic flows. the model holds only
/// its configuration, so one instance can be shared across threads and reused
/// for every road segment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionModel {
    config: EmissionModelConfig,
}

impl EmissionModel {
    pub fn new(config: EmissionModelConfig) -> EmissionModel {
        if config.porous_correction == PorousCorrectionPolicy::Legacy {
            log::warn!(
                "using legacy porous surface correction, speeds above 80 km/h receive -2 dB instead of -3 dB"
            );
        }
        EmissionModel { config }
    }

    pub fn config(&self) -> &EmissionModelConfig {
        &self.config
    }

    /// computes the emission of each vehicle class and their combined sound power level.
    ///
    /// # Arguments
    ///
    /// * `record` - traffic on the road segment
    ///
    /// # Returns
    ///
    /// * the per-class and total levels, or an error if no coefficients cover
    ///   the speed of an active vehicle class
    pub fn evaluate(&self, record: &TrafficFlowRecord) -> Result<EmissionResult, EmissionError> {
        let light = self.class_emission(record, VehicleClass::Light)?;
        let heavy = self.class_emission(record, VehicleClass::Heavy)?;
        Ok(EmissionResult::new(light, heavy))
    }

    /// the combined sound power level of a road segment in dB
    pub fn power(&self, record: &TrafficFlowRecord) -> Result<f64, EmissionError> {
        self.evaluate(record).map(|result| result.total_level)
    }

    fn class_emission(
        &self,
        record: &TrafficFlowRecord,
        class: VehicleClass,
    ) -> Result<ClassEmission, EmissionError> {
        // log10 is undefined for the count and speed of a class with no traffic
        let Some((count, speed)) = record.flow(class).active() else {
            log::debug!("no {class} vehicle traffic, class does not contribute");
            return Ok(ClassEmission::ABSENT);
        };
        let bracket =
            coefficients::lookup(class, record.traffic_regime, record.slope, speed)?;
        let correction = record
            .surface_type
            .correction(speed, self.config.porous_correction);
        let level = bracket.e0
            + bracket.a * (speed / REFERENCE_SPEED_KPH).log10()
            + 10.0 * count.log10()
            + correction;
        Ok(ClassEmission::from_level(level))
    }
}

/// sound power level in dB of a road traffic flow, using the default model
/// configuration. missing or non-positive counts and speeds disable the
/// contribution of their vehicle class.
///
/// # Example
///
/// ```
/// use nmpb::model::{compute_power, RoadSlope, SurfaceType, TrafficRegime};
///
/// let level = compute_power(
///     100.0,
///     None,
///     30.0,
///     None,
///     TrafficRegime::Continuous,
///     SurfaceType::Smooth,
///     RoadSlope::Flat,
/// )
/// .unwrap();
/// assert!((level - 49.4).abs() < 1e-9);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn compute_power(
    light_count: impl Into<Option<f64>>,
    heavy_count: impl Into<Option<f64>>,
    light_speed: impl Into<Option<f64>>,
    heavy_speed: impl Into<Option<f64>>,
    traffic_regime: TrafficRegime,
    surface_type: SurfaceType,
    slope: RoadSlope,
) -> Result<f64, EmissionError> {
    let record = TrafficFlowRecord {
        light_count: light_count.into(),
        heavy_count: heavy_count.into(),
        light_speed: light_speed.into(),
        heavy_speed: heavy_speed.into(),
        traffic_regime,
        surface_type,
        slope,
    };
    EmissionModel::default().power(&record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::decibel_ops;
    use itertools::iproduct;

    fn continuous_smooth_flat() -> TrafficFlowRecord {
        TrafficFlowRecord::new(
            TrafficRegime::Continuous,
            SurfaceType::Smooth,
            RoadSlope::Flat,
        )
    }

    fn assert_close(result: f64, expected: f64) {
        assert!(
            (result - expected).abs() < 1e-9,
            "{result} should be within 1e-9 of {expected}"
        );
    }

    #[test]
    fn light_only_continuous_flow() {
        let record = continuous_smooth_flat()
            .with_light(100.0, 30.0)
            .with_heavy(0.0, 0.0);
        let result = EmissionModel::default().evaluate(&record).unwrap();
        assert_close(result.light.level, 49.4);
        assert_eq!(result.heavy, ClassEmission::ABSENT);
        assert_close(result.total_level, 49.4);
    }

    #[test]
    fn porous_surface_below_sixty() {
        let record = TrafficFlowRecord {
            surface_type: SurfaceType::Porous,
            ..continuous_smooth_flat().with_light(100.0, 30.0)
        };
        let result = EmissionModel::default().evaluate(&record).unwrap();
        assert_close(result.light.level, 48.4);
        assert_close(result.total_level, 48.4);
    }

    #[test]
    fn porous_correction_uses_each_class_speed() {
        let record = TrafficFlowRecord {
            surface_type: SurfaceType::Porous,
            ..continuous_smooth_flat()
                .with_light(100.0, 30.0)
                .with_heavy(10.0, 90.0)
        };
        let result = EmissionModel::default().evaluate(&record).unwrap();
        // light at 30 km/h gets -1 dB, heavy at 90 km/h gets -3 dB
        assert_close(result.light.level, 29.4 + 20.0 - 1.0);
        let heavy = 32.3 + 19.4 * (90.0f64 / 20.0).log10() + 10.0 - 3.0;
        assert_close(result.heavy.level, heavy);
        assert_close(
            result.total_level,
            decibel_ops::energy_sum([result.light.level, result.heavy.level]),
        );
    }

    #[test]
    fn equal_class_levels_add_three_decibels() {
        // one heavy vehicle at 60 km/h emits 42.8 dB (E0=42.8, a=0), and
        // 10^1.34 light vehicles at 30 km/h reach the same level
        let light_count = 10f64.powf((42.8 - 29.4) / 10.0);
        let record = continuous_smooth_flat()
            .with_light(light_count, 30.0)
            .with_heavy(1.0, 60.0);
        let result = EmissionModel::default().evaluate(&record).unwrap();
        assert_close(result.light.level, 42.8);
        assert_close(result.heavy.level, 42.8);
        assert_close(result.total_level, 42.8 + 10.0 * 2f64.log10());
    }

    #[test]
    fn no_traffic_is_zero() {
        let model = EmissionModel::default();
        assert_eq!(model.power(&TrafficFlowRecord::default()).unwrap(), 0.0);
        let record = continuous_smooth_flat()
            .with_light(0.0, 50.0)
            .with_heavy(0.0, 80.0);
        assert_eq!(model.power(&record).unwrap(), 0.0);
    }

    #[test]
    fn suppressed_light_class_matches_heavy_only() {
        let model = EmissionModel::default();
        let heavy_only = continuous_smooth_flat().with_heavy(40.0, 75.0);
        let expected = model.power(&heavy_only).unwrap();
        let heavy_level = model.evaluate(&heavy_only).unwrap().heavy.level;
        assert_close(expected, decibel_ops::energy_sum([heavy_level]));
        for (count, speed) in [(0.0, 50.0), (500.0, 0.0), (-3.0, 50.0), (500.0, -20.0)] {
            let record = heavy_only.with_light(count, speed);
            assert_eq!(model.power(&record).unwrap(), expected);
        }
        let missing = TrafficFlowRecord {
            light_count: Some(500.0),
            ..heavy_only
        };
        assert_eq!(model.power(&missing).unwrap(), expected);
    }

    #[test]
    fn deterministic() {
        let model = EmissionModel::default();
        let record = TrafficFlowRecord::new(
            TrafficRegime::PulsedDecelerated,
            SurfaceType::Porous,
            RoadSlope::Down,
        )
        .with_light(812.5, 67.0)
        .with_heavy(55.0, 82.0);
        let first = model.power(&record).unwrap();
        for _ in 0..10 {
            assert_eq!(model.power(&record).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn more_light_vehicles_never_lower_the_level() {
        let model = EmissionModel::default();
        for (regime, slope, surface) in
            iproduct!(TrafficRegime::ALL, RoadSlope::ALL, SurfaceType::ALL)
        {
            let base = TrafficFlowRecord::new(regime, surface, slope).with_heavy(30.0, 70.0);
            let mut previous = model.evaluate(&base.with_light(1.0, 55.0)).unwrap();
            for count in [2.0, 10.0, 100.0, 1000.0] {
                let current = model.evaluate(&base.with_light(count, 55.0)).unwrap();
                assert!(current.light.linear_power > previous.light.linear_power);
                assert!(current.total_level >= previous.total_level);
                previous = current;
            }
        }
    }

    #[test]
    fn class_order_does_not_change_the_total() {
        let model = EmissionModel::default();
        let record = continuous_smooth_flat()
            .with_light(1200.0, 90.0)
            .with_heavy(80.0, 85.0);
        let result = model.evaluate(&record).unwrap();
        let swapped = EmissionResult::new(result.heavy, result.light);
        assert_eq!(swapped.total_level, result.total_level);
    }

    #[test]
    fn porous_policy_changes_high_speed_correction() {
        let record = TrafficFlowRecord {
            surface_type: SurfaceType::Porous,
            ..continuous_smooth_flat().with_light(100.0, 100.0)
        };
        let tiered = EmissionModel::default().evaluate(&record).unwrap();
        let legacy = EmissionModel::new(EmissionModelConfig {
            porous_correction: PorousCorrectionPolicy::Legacy,
        })
        .evaluate(&record)
        .unwrap();
        assert_close(legacy.light.level - tiered.light.level, 1.0);
    }

    #[test]
    fn infinite_speed_is_an_error() {
        let record = continuous_smooth_flat().with_heavy(10.0, f64::INFINITY);
        match EmissionModel::default().evaluate(&record) {
            Err(EmissionError::UnresolvedBracket { class, .. }) => {
                assert_eq!(class, VehicleClass::Heavy)
            }
            other => panic!("expected unresolved bracket, found {other:?}"),
        }
    }

    #[test]
    fn compute_power_accepts_missing_values() {
        let result = compute_power(
            100.0,
            None,
            30.0,
            None,
            TrafficRegime::Continuous,
            SurfaceType::Porous,
            RoadSlope::Flat,
        )
        .unwrap();
        assert_close(result, 48.4);
    }

    #[test]
    fn high_speed_light_traffic_on_stones() {
        // above 44 km/h the continuous flat table switches to E0=22.0, a=21.6
        let record = TrafficFlowRecord {
            surface_type: SurfaceType::Stones,
            ..continuous_smooth_flat().with_light(1000.0, 90.0)
        };
        let expected = 22.0 + 21.6 * (90.0f64 / 20.0).log10() + 30.0 + 3.0;
        let result = EmissionModel::default().evaluate(&record).unwrap();
        assert_close(result.light.level, expected);
    }
}
