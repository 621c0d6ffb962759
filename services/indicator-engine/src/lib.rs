//! Indicator Engine
//!
//! Normalizes stock-fundamentals indicators scraped from pt-BR pages or
//! spreadsheets and classifies financial ratios into qualitative buckets for
//! reports.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  IndicatorRecord { instrument, fields: name → RawIndicator }         │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  normalizer   "R$ 12,10" / "-55,04%" / "--"  →  NormalizedValue      │
//! │  classifier   (Metric, f64)  →  threshold band  →  Classification    │
//! │  commentary   (Metric, label)  →  description, formula, advice       │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  RecordReport { results: [ClassificationResult], to_row() }          │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use indicator_engine::{Classification, IndicatorRecord, Metric, RatioClassifier};
//!
//! let classifier = RatioClassifier::new();
//! assert_eq!(
//!     classifier.classify(Metric::PriceToEarnings, 12.0).classification,
//!     Classification::Bom
//! );
//!
//! let record = IndicatorRecord::new("PETR4")
//!     .with_field("P/L", "4,5")
//!     .with_field("Margem Líquida", "-55,04%");
//! let report = classifier.evaluate_record(&record);
//! assert_eq!(report.results.len(), 2);
//! ```

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod classifier;
pub mod format;
pub mod normalizer;
pub mod raw;
pub mod record;

pub use classifier::{
    Classification, ClassificationResult, EvaluationIssue, Metric, MetricGroup, RatioClassifier,
};
pub use normalizer::{
    normalize, normalize_or_zero, normalize_with_context, NormalizationContext,
    NormalizationError, NormalizeMode, NormalizeOptions, NormalizedValue,
};
pub use raw::RawIndicator;
pub use record::{parse_records, read_records, IndicatorRecord, RecordReport};
