//! Ratio classifier: thresholds, normalization options and missing-value policy
//! bundled together.

use serde::Serialize;
use std::collections::HashMap;

use indicator_common::{Config, MissingPolicy, Result, ValidationError};

use super::band::{find_band, Band, ThresholdTable};
use super::commentary::{commentary, profile};
use super::label::Classification;
use super::metric::{Metric, MetricGroup, ValueKind};
use super::tables::default_bands;
use crate::format::{format_multiple, format_percent_points};
use crate::normalizer::{
    normalize_with_context, NormalizationContext, NormalizationError, NormalizeMode,
    NormalizeOptions, NormalizedValue,
};
use crate::raw::RawIndicator;

/// Why a result is not a plain band match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationIssue {
    /// Source had no data for the field.
    MissingValue,
    /// Text could not be parsed as a number.
    ParseFailure { error: NormalizationError },
    /// Value or arity the evaluator cannot use (non-finite ratio, zero denominator, ...).
    InvalidMetricInput { metric: Metric, reason: String },
}

/// Classification of one metric, with everything a report needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub metric: Metric,
    pub classification: Classification,
    /// Value that was classified. Percentages are fractions.
    pub value: Option<f64>,
    /// Band that produced the label, e.g. "10 ≤ x < 15".
    pub range: Option<String>,
    pub description: &'static str,
    pub definition: &'static str,
    pub group: MetricGroup,
    pub formula: &'static str,
    pub risks: &'static str,
    pub cross_references: &'static str,
    pub recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<EvaluationIssue>,
}

impl ClassificationResult {
    fn build(
        metric: Metric,
        classification: Classification,
        value: Option<f64>,
        band: Option<&Band>,
        issue: Option<EvaluationIssue>,
    ) -> Self {
        let profile = profile(metric);
        let text = commentary(metric, classification);
        Self {
            metric,
            classification,
            value,
            range: band.map(|band| band.describe(metric.kind())),
            description: text.description,
            definition: profile.definition,
            group: metric.group(),
            formula: profile.formula,
            risks: profile.risks,
            cross_references: profile.cross_references,
            recommendation: text.recommendation,
            issue,
        }
    }

    fn error(metric: Metric, issue: EvaluationIssue) -> Self {
        Self::build(metric, Classification::Erro, None, None, Some(issue))
    }

    fn invalid(metric: Metric, reason: impl Into<String>) -> Self {
        Self::error(
            metric,
            EvaluationIssue::InvalidMetricInput {
                metric,
                reason: reason.into(),
            },
        )
    }

    fn missing(metric: Metric) -> Self {
        Self::build(
            metric,
            Classification::SemDados,
            None,
            None,
            Some(EvaluationIssue::MissingValue),
        )
    }

    pub fn is_error(&self) -> bool {
        self.classification == Classification::Erro
    }

    /// Value formatted for display: percentages in points, multiples with two decimals.
    pub fn formatted_value(&self) -> String {
        match (self.value, self.metric.kind()) {
            (None, _) => "-".to_string(),
            (Some(value), ValueKind::Percentage) => format_percent_points(value),
            (Some(value), ValueKind::Multiple) => format_multiple(value),
        }
    }
}

/// Stateless classifier over a set of threshold tables.
#[derive(Debug, Clone)]
pub struct RatioClassifier {
    /// Tables replacing the defaults, keyed by metric
    overrides: HashMap<Metric, ThresholdTable>,
    normalize: NormalizeOptions,
    missing_policy: MissingPolicy,
}

impl Default for RatioClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RatioClassifier {
    /// Create a classifier with default tables and options.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            normalize: NormalizeOptions::default(),
            missing_policy: MissingPolicy::default(),
        }
    }

    /// Create from configuration, validating threshold overrides.
    ///
    /// Invalid overrides are reported as [`indicator_common::Error::Validation`].
    pub fn with_config(config: &Config) -> Result<Self> {
        let mut overrides = HashMap::new();
        for (name, specs) in &config.classifier.thresholds {
            let metric = Metric::from_field(name).ok_or_else(|| ValidationError::InvalidValue {
                field: format!("classifier.thresholds.{name}"),
                reason: "unknown metric".into(),
            })?;
            let table = ThresholdTable::from_specs(metric, specs)?;
            tracing::debug!(metric = %metric, bands = table.bands().len(), "Threshold override loaded");
            overrides.insert(metric, table);
        }

        Ok(Self {
            overrides,
            normalize: NormalizeOptions::from(&config.normalizer),
            missing_policy: config.classifier.missing_policy,
        })
    }

    /// Use a different missing-value policy.
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Bands in effect for a metric.
    pub fn bands(&self, metric: Metric) -> &[Band] {
        match self.overrides.get(&metric) {
            Some(table) => table.bands(),
            None => default_bands(metric),
        }
    }

    /// Normalization options for a metric's own field.
    pub fn normalize_options(&self, metric: Metric) -> NormalizeOptions {
        self.normalize.with_mode(metric.kind().normalize_mode())
    }

    /// Classify an already numeric ratio.
    pub fn classify(&self, metric: Metric, value: f64) -> ClassificationResult {
        let Some(band) = find_band(self.bands(metric), value) else {
            tracing::debug!(metric = %metric, value, "Value outside every band");
            return ClassificationResult::invalid(metric, format!("{value} is not a finite number"));
        };

        tracing::trace!(metric = %metric, value, label = %band.label, "Classified");
        ClassificationResult::build(metric, band.label, Some(value), Some(band), None)
    }

    /// Normalize a raw field and classify it.
    pub fn classify_raw(
        &self,
        metric: Metric,
        raw: &RawIndicator,
        context: &NormalizationContext,
    ) -> ClassificationResult {
        let context = context.with_metric(metric.name());
        match normalize_with_context(raw, &self.normalize_options(metric), &context) {
            Ok(NormalizedValue::Value(value)) => self.classify(metric, value),
            Ok(NormalizedValue::Missing) => self.classify_missing(metric),
            Err(error) => self.parse_failure(metric, error),
        }
    }

    /// Derive the ratio from two raw component fields, then classify it.
    ///
    /// Components are plain amounts ("R$ 1.234,00"); the ratio of a percentage
    /// metric comes out as a fraction. The denominator must be positive.
    pub fn classify_derived(
        &self,
        metric: Metric,
        numerator: &RawIndicator,
        denominator: &RawIndicator,
        context: &NormalizationContext,
    ) -> ClassificationResult {
        if metric.derivation().is_none() {
            return ClassificationResult::invalid(metric, "metric cannot be derived from components");
        }

        let context = context.with_metric(metric.name());
        let options = self.normalize.with_mode(NormalizeMode::Plain);

        let numerator = match normalize_with_context(numerator, &options, &context) {
            Ok(value) => value,
            Err(error) => return self.parse_failure(metric, error),
        };
        let denominator = match normalize_with_context(denominator, &options, &context) {
            Ok(value) => value,
            Err(error) => return self.parse_failure(metric, error),
        };

        let (numerator, denominator) = match self.missing_policy {
            MissingPolicy::AsZero => (numerator.or_zero(), denominator.or_zero()),
            MissingPolicy::Unavailable => match (numerator.as_f64(), denominator.as_f64()) {
                (Some(n), Some(d)) => (n, d),
                _ => return ClassificationResult::missing(metric),
            },
        };

        if denominator <= 0.0 {
            tracing::debug!(
                metric = %metric,
                instrument = ?context.instrument,
                denominator,
                "Non-positive denominator"
            );
            return ClassificationResult::invalid(
                metric,
                format!("denominator must be positive, got {denominator}"),
            );
        }

        self.classify(metric, numerator / denominator)
    }

    fn classify_missing(&self, metric: Metric) -> ClassificationResult {
        match self.missing_policy {
            MissingPolicy::Unavailable => ClassificationResult::missing(metric),
            MissingPolicy::AsZero => {
                let mut result = self.classify(metric, 0.0);
                result.issue = Some(EvaluationIssue::MissingValue);
                result
            }
        }
    }

    fn parse_failure(&self, metric: Metric, error: NormalizationError) -> ClassificationResult {
        tracing::warn!(
            metric = %metric,
            instrument = ?error.context.instrument,
            raw = %error.raw,
            reason = %error.reason,
            "Unparseable indicator value"
        );
        ClassificationResult::error(metric, EvaluationIssue::ParseFailure { error })
    }
}
