//! Configuration validation.
//!
//! Checks observability settings and the structure of threshold overrides:
//! bands must cover the whole real line, in order, without gaps or overlaps.

use thiserror::Error;

use crate::config::{BandSpec, ClassifierConfig, Config, ObservabilityConfig};
use crate::logging::{LOG_FORMATS, LOG_LEVELS};

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid threshold table for {metric}: {reason}")]
    InvalidBands { metric: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

impl Config {
    /// Validate the entire configuration.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.observability.validate() {
            errors.push(e);
        }

        if let Err(e) = self.classifier.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(ValidationError::Multiple(errors))
        }
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("expected one of {LOG_LEVELS:?}, got '{}'", self.log_level),
            });
        }
        if !LOG_FORMATS.contains(&self.log_format.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("expected one of {LOG_FORMATS:?}, got '{}'", self.log_format),
            });
        }
        Ok(())
    }
}

impl Validate for ClassifierConfig {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors: Vec<ValidationError> = self
            .thresholds
            .iter()
            .filter_map(|(metric, bands)| validate_bands(metric, bands).err())
            .collect();

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

/// Check that a band list covers (-inf, +inf) with contiguous half-open intervals.
pub fn validate_bands(metric: &str, bands: &[BandSpec]) -> ValidationResult<()> {
    let invalid = |reason: String| ValidationError::InvalidBands {
        metric: metric.to_string(),
        reason,
    };

    let (first, last) = match (bands.first(), bands.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(invalid("no bands defined".into())),
    };

    if first.from.is_some() {
        return Err(invalid("first band must be unbounded below".into()));
    }
    if last.to.is_some() {
        return Err(invalid("last band must be unbounded above".into()));
    }

    for (i, band) in bands.iter().enumerate() {
        if band.label.trim().is_empty() {
            return Err(invalid(format!("band {i} has an empty label")));
        }
        for bound in [band.from, band.to].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(invalid(format!("band {i} has a non-finite bound")));
            }
        }
        if let (Some(from), Some(to)) = (band.from, band.to) {
            if from >= to {
                return Err(invalid(format!("band {i} is empty: {from} >= {to}")));
            }
        }
    }

    for (i, pair) in bands.windows(2).enumerate() {
        match (pair[0].to, pair[1].from) {
            (Some(upper), Some(lower)) if upper == lower => {}
            (upper, lower) => {
                return Err(invalid(format!(
                    "bands {i} and {} are not contiguous ({upper:?} vs {lower:?})",
                    i + 1
                )));
            }
        }
    }

    Ok(())
}
