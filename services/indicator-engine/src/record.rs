//! Record evaluation.
//!
//! A record is the flat set of raw fields scraped for one instrument. Each
//! field name is resolved to a metric; metrics that are absent but derivable
//! from component fields (e.g. net income and revenue for the net margin) are
//! derived. The result is one classification per metric found.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indicator_common::error::{Error, Result, ResultExt};

use crate::classifier::{fold_key, ClassificationResult, EvaluationIssue, Metric, RatioClassifier};
use crate::normalizer::NormalizationContext;
use crate::raw::RawIndicator;

/// Raw fields for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    #[serde(alias = "ticker", alias = "papel")]
    pub instrument: String,
    #[serde(default)]
    pub fields: BTreeMap<String, RawIndicator>,
}

impl IndicatorRecord {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, raw: impl Into<RawIndicator>) -> Self {
        self.fields.insert(name.into(), raw.into());
        self
    }

    /// First field whose folded name is one of `keys`.
    fn find_component(&self, keys: &[&str]) -> Option<&RawIndicator> {
        self.fields
            .iter()
            .find(|(name, _)| keys.contains(&fold_key(name).as_str()))
            .map(|(_, raw)| raw)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordInput {
    Many(Vec<IndicatorRecord>),
    One(IndicatorRecord),
}

/// Parse JSON holding either one record or an array of records.
pub fn parse_records(json: &str) -> Result<Vec<IndicatorRecord>> {
    let records = match serde_json::from_str(json)? {
        RecordInput::Many(records) => records,
        RecordInput::One(record) => vec![record],
    };

    if let Some(position) = records.iter().position(|r| r.instrument.trim().is_empty()) {
        return Err(Error::InvalidInput(format!(
            "record {position} has no instrument"
        )));
    }
    Ok(records)
}

/// Read records from a JSON file.
pub fn read_records(path: &Path) -> Result<Vec<IndicatorRecord>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read records from {}", path.display()))?;
    parse_records(&content).context(format!("Invalid records in {}", path.display()))
}

/// Classifications for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub instrument: String,
    pub results: Vec<ClassificationResult>,
    /// Field names that are neither a metric nor a derivation component
    pub unrecognized_fields: Vec<String>,
}

impl RecordReport {
    pub fn get(&self, metric: Metric) -> Option<&ClassificationResult> {
        self.results.iter().find(|result| result.metric == metric)
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_error()).count()
    }

    /// Flatten into ordered `(column, text)` pairs for a spreadsheet row.
    pub fn to_row(&self) -> Vec<(String, String)> {
        let mut row = Vec::with_capacity(1 + self.results.len() * 2);
        row.push(("Papel".to_string(), self.instrument.clone()));
        for result in &self.results {
            let name = result.metric.name();
            row.push((name.to_string(), result.formatted_value()));
            row.push((
                format!("{name} - Classificação"),
                result.classification.to_string(),
            ));
        }
        row
    }
}

impl RatioClassifier {
    /// Classify every metric present in, or derivable from, a record.
    pub fn evaluate_record(&self, record: &IndicatorRecord) -> RecordReport {
        let context = NormalizationContext::for_instrument(record.instrument.as_str());

        let mut direct: BTreeMap<Metric, &RawIndicator> = BTreeMap::new();
        let mut unrecognized_fields = Vec::new();

        for (name, raw) in &record.fields {
            match Metric::from_field(name) {
                Some(metric) => {
                    if direct.insert(metric, raw).is_some() {
                        tracing::debug!(
                            instrument = %record.instrument,
                            field = %name,
                            metric = %metric,
                            "Metric given twice, keeping the last field"
                        );
                    }
                }
                None if Metric::is_component_field(name) => {}
                None => {
                    tracing::debug!(
                        instrument = %record.instrument,
                        field = %name,
                        "Unrecognized field"
                    );
                    unrecognized_fields.push(name.clone());
                }
            }
        }

        let results: Vec<ClassificationResult> = Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                let derived = || {
                    let derivation = metric.derivation()?;
                    let numerator = record.find_component(derivation.numerator)?;
                    let denominator = record.find_component(derivation.denominator)?;
                    Some(self.classify_derived(metric, numerator, denominator, &context))
                };

                let Some(raw) = direct.get(&metric) else {
                    return derived();
                };
                let result = self.classify_raw(metric, raw, &context);
                if result.issue != Some(EvaluationIssue::MissingValue) {
                    return Some(result);
                }

                // Own field has no data: components win if they yield a clean value
                match derived() {
                    Some(fallback) if fallback.issue.is_none() => {
                        tracing::debug!(
                            instrument = %record.instrument,
                            metric = %metric,
                            "Missing field, derived from components"
                        );
                        Some(fallback)
                    }
                    _ => Some(result),
                }
            })
            .collect();

        let report = RecordReport {
            instrument: record.instrument.clone(),
            results,
            unrecognized_fields,
        };

        tracing::debug!(
            instrument = %report.instrument,
            metrics = report.results.len(),
            errors = report.error_count(),
            "Record evaluated"
        );

        report
    }

    /// Evaluate records independently; order is preserved.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_batch(&self, records: &[IndicatorRecord]) -> Vec<RecordReport> {
        records
            .iter()
            .map(|record| self.evaluate_record(record))
            .collect()
    }

    /// Evaluate records independently on the rayon pool; order is preserved.
    #[cfg(feature = "parallel")]
    pub fn evaluate_batch(&self, records: &[IndicatorRecord]) -> Vec<RecordReport> {
        use rayon::prelude::*;

        records
            .par_iter()
            .map(|record| self.evaluate_record(record))
            .collect()
    }
}
