//! Measured timings and the "no data" marker.
//!
//! Data providers write `-1` for a run that did not happen. That sentinel is
//! turned into [`Timing::NoData`] once, at ingestion, so nothing downstream
//! has to know about it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Value a data provider writes for "did not run".
pub const NOT_MEASURED: f64 = -1.0;

/// A single execution time in seconds, or the explicit absence of one.
///
/// Serializes as a JSON number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Timing {
    Measured(f64),
    NoData,
}

impl Timing {
    pub fn value(self) -> Option<f64> {
        match self {
            Timing::Measured(v) => Some(v),
            Timing::NoData => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Timing::Measured(_))
    }

    /// Combine two timings, yielding `NoData` if either side is missing.
    fn zip_with(self, rhs: Timing, f: impl FnOnce(f64, f64) -> f64) -> Timing {
        match (self, rhs) {
            (Timing::Measured(a), Timing::Measured(b)) => Timing::Measured(f(a, b)),
            _ => Timing::NoData,
        }
    }
}

impl From<Option<f64>> for Timing {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Timing::NoData, Timing::Measured)
    }
}

impl From<Timing> for Option<f64> {
    fn from(t: Timing) -> Self {
        t.value()
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::Measured(v) => write!(f, "{v}"),
            Timing::NoData => f.write_str("-"),
        }
    }
}

macro_rules! propagate_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Timing {
            type Output = Timing;

            fn $method(self, rhs: Timing) -> Timing {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }
    };
}

propagate_op!(Add, add, +);
propagate_op!(Sub, sub, -);
propagate_op!(Mul, mul, *);
propagate_op!(Div, div, /);

/// How raw numbers from a data provider are turned into [`Timing`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentinelPolicy {
    /// `-1` means "not measured".
    #[default]
    Filter,
    /// Every number is a measurement, `-1` included.
    Keep,
}

impl SentinelPolicy {
    pub fn canonicalize(self, raw: f64) -> Timing {
        if self == SentinelPolicy::Filter && raw == NOT_MEASURED {
            return Timing::NoData;
        }
        if raw < 0.0 {
            tracing::warn!(value = raw, "negative timing accepted as a measurement");
        }
        Timing::Measured(raw)
    }

    /// An absent field is never a measurement, whatever the policy.
    pub fn canonicalize_opt(self, raw: Option<f64>) -> Timing {
        raw.map_or(Timing::NoData, |v| self.canonicalize(v))
    }
}
