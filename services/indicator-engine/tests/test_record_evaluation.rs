//! End-to-end record evaluation with file-based configuration.

use std::io::Write;

use indicator_common::{Config, MissingPolicy};
use indicator_engine::{read_records, Classification, EvaluationIssue, Metric, RatioClassifier};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const RECORDS: &str = r#"[
    {
        "papel": "PETR4",
        "fields": {
            "P/L": "4,5",
            "P/VP": "1,17",
            "Dív. Líquida/EBITDA": "1,5",
            "ROE": "0",
            "Lucro Líquido": "R$ 36.600.000.000,00",
            "Receita Líquida": "R$ 490.800.000.000,00"
        }
    },
    {
        "ticker": "MGLU3",
        "fields": {
            "P/L": "-3,2",
            "Margem Líquida": "-55,04%",
            "Liquidez Corrente": 1.3,
            "EV/EBITDA": "n/d"
        }
    }
]"#;

#[test]
fn test_evaluate_file_with_defaults() {
    let file = write_temp(RECORDS);
    let records = read_records(file.path()).unwrap();
    let reports = RatioClassifier::new().evaluate_batch(&records);
    assert_eq!(reports.len(), 2);

    let petr = &reports[0];
    assert_eq!(petr.instrument, "PETR4");
    assert_eq!(
        petr.get(Metric::PriceToEarnings).unwrap().classification,
        Classification::Otimo
    );
    assert_eq!(
        petr.get(Metric::NetDebtToEbitda).unwrap().classification,
        Classification::Moderado
    );
    // "0" reads as missing by default
    assert_eq!(petr.get(Metric::Roe).unwrap().classification, Classification::SemDados);
    // 36.6 / 490.8 ≈ 7.5%
    let margin = petr.get(Metric::NetMargin).unwrap();
    assert_eq!(margin.classification, Classification::Moderado);
    assert_eq!(margin.formatted_value(), "7,46%");

    let mglu = &reports[1];
    assert_eq!(
        mglu.get(Metric::PriceToEarnings).unwrap().classification,
        Classification::Negativo
    );
    assert_eq!(
        mglu.get(Metric::NetMargin).unwrap().classification,
        Classification::Negativo
    );
    assert_eq!(
        mglu.get(Metric::CurrentLiquidity).unwrap().classification,
        Classification::Moderado
    );

    // One bad field does not stop the rest of the record
    let ev = mglu.get(Metric::EvToEbitda).unwrap();
    assert_eq!(ev.classification, Classification::Erro);
    assert!(matches!(ev.issue, Some(EvaluationIssue::ParseFailure { .. })));
    assert_eq!(mglu.error_count(), 1);
}

#[test]
fn test_evaluate_with_config_file() {
    let config_file = write_temp(
        r#"{
            "normalizer": { "zero_is_missing": false },
            "classifier": {
                "missing_policy": "as_zero",
                "thresholds": {
                    "ROE": [
                        { "to": 0.0, "label": "Negativo" },
                        { "from": 0.0, "to": 0.25, "label": "Moderado" },
                        { "from": 0.25, "label": "Ótimo" }
                    ]
                }
            }
        }"#,
    );
    let config = Config::load_from(config_file.path()).unwrap();
    config.validate().unwrap();
    assert_eq!(config.classifier.missing_policy, MissingPolicy::AsZero);

    let classifier = RatioClassifier::with_config(&config).unwrap();
    let records = read_records(write_temp(RECORDS).path()).unwrap();
    let reports = classifier.evaluate_batch(&records);

    // "0" is a real zero, classified by the overridden table
    let roe = reports[0].get(Metric::Roe).unwrap();
    assert_eq!(roe.value, Some(0.0));
    assert_eq!(roe.classification, Classification::Moderado);
    assert_eq!(roe.range.as_deref(), Some("0% ≤ x < 25%"));
    assert!(roe.issue.is_none());
}

#[test]
fn test_invalid_threshold_config_is_rejected() {
    let config_file = write_temp(
        r#"{
            "classifier": {
                "thresholds": {
                    "P/L": [
                        { "to": 10.0, "label": "Bom" },
                        { "from": 12.0, "label": "Ruim" }
                    ]
                }
            }
        }"#,
    );
    let config = Config::load_from(config_file.path()).unwrap();
    assert!(config.validate().is_err());
    assert!(RatioClassifier::with_config(&config).is_err());
}

#[test]
fn test_report_serializes_for_renderers() {
    let records = read_records(write_temp(RECORDS).path()).unwrap();
    let reports = RatioClassifier::new().evaluate_batch(&records);
    let json = serde_json::to_value(&reports).unwrap();

    let first = &json[0]["results"][0];
    assert_eq!(first["metric"], "P/L");
    assert_eq!(first["classification"], "Ótimo");
    assert_eq!(first["group"], "Valuation");

    let row = reports[1].to_row();
    assert_eq!(row[0], ("Papel".to_string(), "MGLU3".to_string()));
}
