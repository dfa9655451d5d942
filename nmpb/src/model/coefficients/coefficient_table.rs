//! NMPB-Routes-96 emission coefficient tables.
//!
//! each table is an ordered list of speed brackets for one combination of
//! vehicle class, traffic regime and slope. speeds are in km/h. the tables
//! shared by several combinations are defined once.
use super::SpeedBracket;
use crate::model::{EmissionError, RoadSlope, TrafficRegime, VehicleClass};
use itertools::{iproduct, Itertools};
use serde::Serialize;

const LIGHT_CONTINUOUS_LEVEL: &[SpeedBracket] = &[
    SpeedBracket::below(44.0, 29.4, 0.0),
    SpeedBracket::unbounded(22.0, 21.6),
];

const LIGHT_UPHILL: &[SpeedBracket] = &[
    SpeedBracket::below(43.0, 37.0, -10.0),
    SpeedBracket::below(80.0, 32.1, 4.8),
    SpeedBracket::unbounded(22.0, 21.6),
];

const LIGHT_ACCELERATED_FLAT: &[SpeedBracket] = &[
    SpeedBracket::below(50.0, 37.2, -10.0),
    SpeedBracket::below(64.0, 33.0, 0.0),
    SpeedBracket::unbounded(22.0, 21.6),
];

const LIGHT_ACCELERATED_UP: &[SpeedBracket] = &[
    SpeedBracket::below(32.0, 37.0, -10.0),
    SpeedBracket::unbounded(34.0, 5.2),
];

const LIGHT_PULSED: &[SpeedBracket] = &[
    SpeedBracket::below(40.0, 34.0, -9.3),
    SpeedBracket::below(53.0, 31.2, 0.0),
    SpeedBracket::unbounded(22.0, 21.6),
];

const LIGHT_DECELERATED_FLAT: &[SpeedBracket] = &[
    SpeedBracket::below(60.0, 29.4, 0.0),
    SpeedBracket::below(100.0, 13.0, 34.3),
    SpeedBracket::unbounded(22.0, 21.6),
];

const LIGHT_DECELERATED_DOWN: &[SpeedBracket] = &[
    SpeedBracket::below(60.0, 27.1, 0.0),
    SpeedBracket::unbounded(11.3, 33.8),
];

const HEAVY_LEVEL: &[SpeedBracket] = &[
    SpeedBracket::below(51.0, 47.0, -10.3),
    SpeedBracket::below(70.0, 42.8, 0.0),
    SpeedBracket::unbounded(32.3, 19.4),
];

const HEAVY_UPHILL: &[SpeedBracket] = &[
    SpeedBracket::below(63.0, 48.0, -10.4),
    SpeedBracket::below(70.0, 42.8, 0.0),
    SpeedBracket::unbounded(32.3, 19.4),
];

const HEAVY_DECELERATED_FLAT: &[SpeedBracket] = &[
    SpeedBracket::below(65.0, 36.0, 3.9),
    SpeedBracket::unbounded(16.7, 41.7),
];

const HEAVY_DECELERATED_UP: &[SpeedBracket] = &[
    SpeedBracket::below(65.0, 41.0, 0.0),
    SpeedBracket::unbounded(27.9, 25.7),
];

/// the speed brackets for a vehicle class travelling in a traffic regime on a slope.
/// light vehicles distinguish all four regimes, while heavy vehicles share one set
/// of tables for every regime except pulsed decelerated.
pub fn coefficient_table(
    class: VehicleClass,
    regime: TrafficRegime,
    slope: RoadSlope,
) -> &'static [SpeedBracket] {
    use RoadSlope as S;
    use TrafficRegime as R;
    match class {
        VehicleClass::Light => match (regime, slope) {
            (R::Continuous, S::Flat | S::Down) => LIGHT_CONTINUOUS_LEVEL,
            (R::Continuous, S::Up) => LIGHT_UPHILL,
            (R::PulsedAccelerated, S::Flat) => LIGHT_ACCELERATED_FLAT,
            (R::PulsedAccelerated, S::Up) => LIGHT_ACCELERATED_UP,
            (R::PulsedAccelerated, S::Down) => LIGHT_PULSED,
            (R::NonDifferentiatedPulsed, S::Flat | S::Down) => LIGHT_PULSED,
            (R::NonDifferentiatedPulsed, S::Up) => LIGHT_UPHILL,
            (R::PulsedDecelerated, S::Flat) => LIGHT_DECELERATED_FLAT,
            (R::PulsedDecelerated, S::Up) => LIGHT_PULSED,
            (R::PulsedDecelerated, S::Down) => LIGHT_DECELERATED_DOWN,
        },
        VehicleClass::Heavy => match (regime, slope) {
            (R::Continuous | R::PulsedAccelerated | R::NonDifferentiatedPulsed, S::Flat | S::Down) => {
                HEAVY_LEVEL
            }
            (R::Continuous | R::PulsedAccelerated | R::NonDifferentiatedPulsed, S::Up) => {
                HEAVY_UPHILL
            }
            (R::PulsedDecelerated, S::Flat) => HEAVY_DECELERATED_FLAT,
            (R::PulsedDecelerated, S::Up) => HEAVY_DECELERATED_UP,
            (R::PulsedDecelerated, S::Down) => HEAVY_LEVEL,
        },
    }
}

/// pairs each bracket of a table with its inclusive lower speed bound, which is
/// the upper bound of the previous bracket, or zero for the first one.
pub fn bracket_ranges<'a>(
    table: &'a [SpeedBracket],
) -> impl Iterator<Item = (f64, &'a SpeedBracket)> + 'a {
    table.iter().scan(0.0, |lower, bracket| {
        let current = *lower;
        *lower = bracket.upper_bound_kph.unwrap_or(f64::INFINITY);
        Some((current, bracket))
    })
}

/// finds the regression coefficients for a vehicle class at some speed.
///
/// # Arguments
///
/// * `class`     - vehicle class to look up
/// * `regime`    - traffic regime of the road segment
/// * `slope`     - slope of the road segment
/// * `speed_kph` - representative speed of the vehicle class, used only to pick a bracket
///
/// # Returns
///
/// * the matching bracket, or an error if no bracket covers the speed, which
///   happens for non-positive or non-finite speeds
pub fn lookup(
    class: VehicleClass,
    regime: TrafficRegime,
    slope: RoadSlope,
    speed_kph: f64,
) -> Result<SpeedBracket, EmissionError> {
    let table = coefficient_table(class, regime, slope);
    let bracket = bracket_ranges(table)
        .find(|(lower, bracket)| speed_kph > 0.0 && bracket.contains(*lower, speed_kph))
        .map(|(_, bracket)| *bracket)
        .ok_or(EmissionError::UnresolvedBracket {
            class,
            regime,
            slope,
            speed: speed_kph,
        })?;
    log::debug!(
        "{class} vehicles, {regime} traffic, {slope} slope at {speed_kph} km/h: E0={}, a={}",
        bracket.e0,
        bracket.a
    );
    Ok(bracket)
}

/// a coefficient table along with the combination of categories that selects it.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct CoefficientTableEntry {
    pub vehicle_class: VehicleClass,
    pub traffic_regime: TrafficRegime,
    pub slope: RoadSlope,
    pub brackets: &'static [SpeedBracket],
}

/// lists the table of every (vehicle class, traffic regime, slope) combination.
pub fn coefficient_tables() -> Vec<CoefficientTableEntry> {
    iproduct!(VehicleClass::ALL, TrafficRegime::ALL, RoadSlope::ALL)
        .map(|(vehicle_class, traffic_regime, slope)| CoefficientTableEntry {
            vehicle_class,
            traffic_regime,
            slope,
            brackets: coefficient_table(vehicle_class, traffic_regime, slope),
        })
        .collect_vec()
}

/// confirms that every combination of categories has a table whose brackets
/// are contiguous and cover all positive speeds.
pub fn validate_tables() -> Result<(), EmissionError> {
    for entry in coefficient_tables() {
        validate_table(entry.brackets).map_err(|msg| {
            EmissionError::ConfigurationError(format!(
                "{} vehicle table for traffic regime '{}' and slope '{}': {msg}",
                entry.vehicle_class, entry.traffic_regime, entry.slope
            ))
        })?;
    }
    Ok(())
}

fn validate_table(table: &[SpeedBracket]) -> Result<(), String> {
    let (last, rest) = table
        .split_last()
        .ok_or_else(|| String::from("table has no speed brackets"))?;
    if last.upper_bound_kph.is_some() {
        return Err(String::from("last speed bracket must be unbounded"));
    }
    let bounds = rest
        .iter()
        .map(|b| {
            b.upper_bound_kph
                .ok_or_else(|| String::from("only the last speed bracket may be unbounded"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(first) = bounds.first() {
        if !(*first > 0.0 && first.is_finite()) {
            return Err(format!("first speed bound {first} must be positive"));
        }
    }
    if let Some((a, b)) = bounds.iter().tuple_windows().find(|(a, b)| a >= b) {
        return Err(format!(
            "speed bounds {a} and {b} are not strictly increasing"
        ));
    }
    if let Some(b) = table.iter().find(|b| !b.e0.is_finite() || !b.a.is_finite()) {
        return Err(format!("coefficients E0={}, a={} are not finite", b.e0, b.a));
    }
    Ok(())
}
