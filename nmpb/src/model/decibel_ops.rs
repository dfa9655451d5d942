//! conversions between sound power levels in dB and linear power.

/// linear power of a level in dB, 10^(L/10)
pub fn level_to_linear(level_db: f64) -> f64 {
    10f64.powf(level_db / 10.0)
}

/// level in dB of a linear power. a non-positive power means no source, which
/// is reported as 0 dB instead of the undefined logarithm.
pub fn linear_to_level(power: f64) -> f64 {
    if power > 0.0 {
        10.0 * power.log10()
    } else {
        0.0
    }
}

/// combines levels of independent sources by summing them in the linear domain.
#[cfg(test)]
pub(crate) fn energy_sum<I>(levels_db: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let power: f64 = levels_db.into_iter().map(level_to_linear).sum();
    linear_to_level(power)
}
