use serde::Serialize;

/// one row of an emission coefficient table: the regression coefficients that
/// apply to speeds below `upper_bound_kph` and at or above the bound of the
/// previous row.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SpeedBracket {
    /// exclusive upper speed bound in km/h, or None for the last, unbounded row
    pub upper_bound_kph: Option<f64>,
    /// regression intercept E₀ in dB
    pub e0: f64,
    /// regression coefficient applied to log10(v / 20)
    pub a: f64,
}

impl SpeedBracket {
    pub const fn below(upper_bound_kph: f64, e0: f64, a: f64) -> SpeedBracket {
        SpeedBracket {
            upper_bound_kph: Some(upper_bound_kph),
            e0,
            a,
        }
    }

    pub const fn unbounded(e0: f64, a: f64) -> SpeedBracket {
        SpeedBracket {
            upper_bound_kph: None,
            e0,
            a,
        }
    }

    /// true if `speed_kph` lies in [lower_bound_kph, upper_bound_kph). speeds that
    /// are not finite never match.
    pub fn contains(&self, lower_bound_kph: f64, speed_kph: f64) -> bool {
        if !speed_kph.is_finite() || speed_kph < lower_bound_kph {
            return false;
        }
        match self.upper_bound_kph {
            Some(upper) => speed_kph < upper,
            None => true,
        }
    }
}
