//! Snapping coordinates to a grid step

use std::fmt;
use std::str::FromStr;

use crate::errors::GeometryError;

/// Rounding rule applied to `value / step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Round down to the step below
    #[default]
    Floor,
    /// Round up to the step above
    Ceil,
    /// Nearest step; halves round away from zero (`45 / 10` snaps to `50`)
    Round,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => Ok(Strategy::Floor),
            "ceil" => Ok(Strategy::Ceil),
            "round" => Ok(Strategy::Round),
            other => Err(format!("unknown quantize strategy `{other}`")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Floor => "floor",
            Strategy::Ceil => "ceil",
            Strategy::Round => "round",
        })
    }
}

/// Snap `value` to a multiple of `step`, truncating the result to an integer.
///
/// A zero step is rejected rather than dividing by it.
pub fn quantize(value: f64, step: f64, strategy: Strategy) -> Result<i64, GeometryError> {
    if step == 0.0 {
        return Err(GeometryError::ZeroStep);
    }
    if !value.is_finite() || !step.is_finite() {
        return Err(GeometryError::NonFinite { what: "quantize" });
    }
    let steps = value / step;
    let snapped = match strategy {
        Strategy::Floor => steps.floor(),
        Strategy::Ceil => steps.ceil(),
        Strategy::Round => steps.round(),
    };
    Ok((snapped * step).trunc() as i64)
}
