//! Ratio Classifier.
//!
//! Maps a financial ratio to a qualitative label using one threshold table per
//! metric, and attaches static descriptive text for reports.
//!
//! ```text
//! raw field ──► normalizer ──► finite f64 ──► threshold bands ──► label + commentary
//!                   │                               │
//!                   └── missing / parse failure ────┴──► "Sem dados" / "Erro"
//! ```
//!
//! Classification never fails: bad input becomes the `Erro` label with the
//! reason attached as an [`EvaluationIssue`].

pub mod band;
pub mod commentary;
pub mod evaluator;
pub mod label;
pub mod metric;
pub mod tables;

pub use band::{Band, ThresholdTable};
pub use commentary::{LabelCommentary, MetricProfile};
pub use evaluator::{ClassificationResult, EvaluationIssue, RatioClassifier};
pub use label::Classification;
pub use metric::{Derivation, Metric, MetricGroup, ValueKind};

/// Fold a field or label name for lookups: lowercase, accents removed,
/// only letters and digits kept. `"Dív. Líquida/EBITDA"` → `"divliquidaebitda"`.
pub fn fold_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_key() {
        assert_eq!(fold_key("Dív. Líquida/EBITDA"), "divliquidaebitda");
        assert_eq!(fold_key("P/L"), "pl");
        assert_eq!(fold_key("Cotação"), "cotacao");
        assert_eq!(fold_key("  Muito Crítico "), "muitocritico");
        assert_eq!(fold_key("--"), "");
    }
}
