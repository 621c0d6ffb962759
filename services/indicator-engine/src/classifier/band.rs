//! Threshold bands and tables.

use serde::Serialize;

use indicator_common::validation::validate_bands;
use indicator_common::{BandSpec, ValidationError};

use super::label::Classification;
use super::metric::{Metric, ValueKind};
use crate::format::format_compact;

/// Half-open interval `[lower, upper)` mapped to a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub label: Classification,
}

impl Band {
    pub const fn new(lower: f64, upper: f64, label: Classification) -> Self {
        Self {
            lower,
            upper,
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }

    /// Human-readable range, e.g. "10 ≤ x < 15" or "x ≥ 20%".
    pub fn describe(&self, kind: ValueKind) -> String {
        let bound = |v: f64| match kind {
            ValueKind::Multiple => format_compact(v),
            ValueKind::Percentage => format!("{}%", format_compact(v * 100.0)),
        };

        match (self.lower.is_finite(), self.upper.is_finite()) {
            (false, false) => "qualquer valor".to_string(),
            (false, true) => format!("x < {}", bound(self.upper)),
            (true, false) => format!("x ≥ {}", bound(self.lower)),
            (true, true) => format!("{} ≤ x < {}", bound(self.lower), bound(self.upper)),
        }
    }
}

/// First band containing `value`. `None` for NaN and infinities.
pub fn find_band(bands: &[Band], value: f64) -> Option<&Band> {
    if !value.is_finite() {
        return None;
    }
    bands.iter().find(|band| band.contains(value))
}

/// Check that bands cover the real line contiguously, lowest first.
pub fn check_bands(bands: &[Band]) -> Result<(), String> {
    let (first, last) = match (bands.first(), bands.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("no bands".into()),
    };
    if first.lower != f64::NEG_INFINITY {
        return Err(format!("first band starts at {}", first.lower));
    }
    if last.upper != f64::INFINITY {
        return Err(format!("last band ends at {}", last.upper));
    }
    for band in bands {
        if band.lower >= band.upper {
            return Err(format!("empty band [{}, {})", band.lower, band.upper));
        }
        if band.label.is_sentinel() {
            return Err(format!("band uses reserved label {}", band.label));
        }
    }
    for pair in bands.windows(2) {
        if pair[0].upper != pair[1].lower {
            return Err(format!(
                "gap or overlap between {} and {}",
                pair[0].upper, pair[1].lower
            ));
        }
    }
    Ok(())
}

/// A validated threshold table loaded from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    pub metric: Metric,
    bands: Vec<Band>,
}

impl ThresholdTable {
    /// Build from config band specs, validating structure and labels.
    pub fn from_specs(metric: Metric, specs: &[BandSpec]) -> Result<Self, ValidationError> {
        validate_bands(metric.name(), specs)?;

        let bands = specs
            .iter()
            .map(|spec| {
                let label: Classification =
                    spec.label
                        .parse()
                        .map_err(|reason: String| ValidationError::InvalidBands {
                            metric: metric.name().to_string(),
                            reason,
                        })?;
                Ok(Band::new(
                    spec.from.unwrap_or(f64::NEG_INFINITY),
                    spec.to.unwrap_or(f64::INFINITY),
                    label,
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        check_bands(&bands).map_err(|reason| ValidationError::InvalidBands {
            metric: metric.name().to_string(),
            reason,
        })?;

        Ok(Self { metric, bands })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}
