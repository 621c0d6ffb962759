//! Value Normalizer.
//!
//! Turns raw indicator values into numbers. Handles the pt-BR conventions found on
//! fundamentals pages and spreadsheets:
//!
//! - currency prefix: `"R$ 12,10"`, `"-R$ 63.526.000,00"`, `"R$ -1,00"`
//! - thousands separator `.` and decimal comma `,`: `"1.234,56"`
//! - percent suffix: `"-55,04%"`
//! - "no data" tokens: `"-"`, `"--"`, `"--%"`, `"-%"`, blank, and `"0"`
//!
//! Missing values come back as [`NormalizedValue::Missing`] instead of a bare `0.0`,
//! so a real zero stays distinguishable from a field the source had no data for.
//! [`NormalizedValue::or_zero`] and [`normalize_or_zero`] give the flat `0.0`
//! behaviour for callers that want it.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use indicator_common::NormalizerConfig;

use crate::raw::RawIndicator;

/// Tokens scraped pages use for "not available".
pub const MISSING_TOKENS: &[&str] = &["-", "--", "--%", "-%"];

/// Currency marker stripped from the front of a value.
pub const CURRENCY_MARKER: &str = "R$";

/// How a textual value is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum NormalizeMode {
    /// Keep the numeral as written ("25%" → 25.0).
    #[default]
    Plain,
    /// Percentage points become a fraction ("25%" → 0.25, "25" → 0.25).
    PercentFraction,
}

/// Options for a single normalization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub mode: NormalizeMode,
    /// Drop whitespace and "." thousands separators, convert the decimal comma.
    pub locale_cleanup: bool,
    /// Treat the literal "0" as missing.
    pub zero_is_missing: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            mode: NormalizeMode::Plain,
            locale_cleanup: true,
            zero_is_missing: true,
        }
    }
}

impl NormalizeOptions {
    /// Same options with a different mode.
    pub fn with_mode(self, mode: NormalizeMode) -> Self {
        Self { mode, ..self }
    }
}

impl From<&NormalizerConfig> for NormalizeOptions {
    fn from(config: &NormalizerConfig) -> Self {
        Self {
            mode: NormalizeMode::Plain,
            locale_cleanup: config.locale_cleanup,
            zero_is_missing: config.zero_is_missing,
        }
    }
}

/// Result of normalizing a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum NormalizedValue {
    /// The source had no data for this field.
    Missing,
    /// A finite number.
    Value(f64),
}

impl NormalizedValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Value(v) => Some(*v),
        }
    }

    /// Collapse missing into `0.0`.
    pub fn or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Where a value came from, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationContext {
    pub metric: Option<String>,
    pub instrument: Option<String>,
}

impl NormalizationContext {
    pub fn new(metric: impl Into<String>, instrument: Option<&str>) -> Self {
        Self {
            metric: Some(metric.into()),
            instrument: instrument.map(str::to_string),
        }
    }

    pub fn for_instrument(instrument: impl Into<String>) -> Self {
        Self {
            metric: None,
            instrument: Some(instrument.into()),
        }
    }

    /// Same context, naming a metric.
    pub fn with_metric(&self, metric: impl Into<String>) -> Self {
        Self {
            metric: Some(metric.into()),
            instrument: self.instrument.clone(),
        }
    }
}

impl fmt::Display for NormalizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.metric, &self.instrument) {
            (Some(metric), Some(instrument)) => write!(f, " ({metric} of {instrument})"),
            (Some(metric), None) => write!(f, " ({metric})"),
            (None, Some(instrument)) => write!(f, " ({instrument})"),
            (None, None) => Ok(()),
        }
    }
}

/// A value that could not be parsed as a number.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("cannot parse {raw:?} as a number{context}: {reason}")]
pub struct NormalizationError {
    pub raw: String,
    pub context: NormalizationContext,
    pub reason: String,
}

/// Whether a trimmed text value means "not available".
pub fn is_missing_token(text: &str, zero_is_missing: bool) -> bool {
    let text = text.trim();
    text.is_empty() || MISSING_TOKENS.contains(&text) || (zero_is_missing && text == "0")
}

/// Normalize a raw value.
pub fn normalize(
    raw: &RawIndicator,
    options: &NormalizeOptions,
) -> Result<NormalizedValue, NormalizationError> {
    normalize_with_context(raw, options, &NormalizationContext::default())
}

/// Normalize a raw value, attributing failures to `context`.
pub fn normalize_with_context(
    raw: &RawIndicator,
    options: &NormalizeOptions,
    context: &NormalizationContext,
) -> Result<NormalizedValue, NormalizationError> {
    let fail = |reason: String| NormalizationError {
        raw: raw.display(),
        context: context.clone(),
        reason,
    };

    match raw {
        RawIndicator::Absent => Ok(NormalizedValue::Missing),
        RawIndicator::Number(n) if n.is_finite() => Ok(NormalizedValue::Value(*n)),
        RawIndicator::Number(_) => Err(fail("not a finite number".into())),
        RawIndicator::Text(text) => {
            if is_missing_token(text, options.zero_is_missing) {
                return Ok(NormalizedValue::Missing);
            }
            parse_text(text, options)
                .map(NormalizedValue::Value)
                .map_err(fail)
        }
    }
}

/// Normalize, logging failures and substituting `0.0` for them and for missing values.
pub fn normalize_or_zero(
    raw: &RawIndicator,
    options: &NormalizeOptions,
    context: &NormalizationContext,
) -> f64 {
    match normalize_with_context(raw, options, context) {
        Ok(value) => value.or_zero(),
        Err(err) => {
            tracing::warn!(
                raw = %err.raw,
                metric = ?err.context.metric,
                instrument = ?err.context.instrument,
                reason = %err.reason,
                "Unparseable indicator value, using 0.0"
            );
            0.0
        }
    }
}

/// Split a leading sign off `text`.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, text)
    }
}

fn parse_text(text: &str, options: &NormalizeOptions) -> Result<f64, String> {
    let mut body = text.trim();

    if let Some(rest) = body.strip_suffix('%') {
        body = rest.trim_end();
    }

    let (mut negative, mut body) = split_sign(body);

    if let Some(rest) = body.strip_prefix(CURRENCY_MARKER) {
        // The sign may also follow the marker: "R$ -1,00"
        let (inner_negative, rest) = split_sign(rest.trim_start());
        negative ^= inner_negative;
        body = rest;
    }

    let number = if options.locale_cleanup {
        let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.contains(',') {
            compact.replace('.', "").replace(',', ".")
        } else if compact.matches('.').count() > 1 {
            // "63.526.000": only thousands separators
            compact.replace('.', "")
        } else {
            compact
        }
    } else {
        body.to_string()
    };

    if number.is_empty() {
        return Err("no digits left after cleanup".into());
    }

    let value: f64 = number
        .parse()
        .map_err(|_| format!("'{number}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{number}' is not a finite number"));
    }

    let value = if negative { -value } else { value };

    Ok(match options.mode {
        NormalizeMode::Plain => value,
        NormalizeMode::PercentFraction => value / 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn plain(raw: impl Into<RawIndicator>) -> Result<NormalizedValue, NormalizationError> {
        normalize(&raw.into(), &NormalizeOptions::default())
    }

    fn fraction(raw: impl Into<RawIndicator>) -> Result<NormalizedValue, NormalizationError> {
        normalize(
            &raw.into(),
            &NormalizeOptions::default().with_mode(NormalizeMode::PercentFraction),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test_case("-" ; "dash")]
    #[test_case("--" ; "double dash")]
    #[test_case("--%" ; "double dash percent")]
    #[test_case("-%" ; "dash percent")]
    #[test_case("" ; "empty")]
    #[test_case(" " ; "space")]
    #[test_case("\u{a0}\t" ; "non breaking space and tab")]
    #[test_case("0" ; "literal zero")]
    fn test_missing_tokens(token: &str) {
        for mode in [NormalizeMode::Plain, NormalizeMode::PercentFraction] {
            let options = NormalizeOptions::default().with_mode(mode);
            let value = normalize(&RawIndicator::from(token), &options).unwrap();
            assert!(value.is_missing());
            assert_eq!(value.or_zero(), 0.0);
        }
    }

    #[test]
    fn test_absent_is_missing() {
        let value = plain(RawIndicator::Absent).unwrap();
        assert_eq!(value, NormalizedValue::Missing);
        assert_eq!(value.or_zero(), 0.0);
    }

    #[test]
    fn test_zero_can_be_a_real_value() {
        let options = NormalizeOptions {
            zero_is_missing: false,
            ..NormalizeOptions::default()
        };
        let value = normalize(&"0".into(), &options).unwrap();
        assert_eq!(value, NormalizedValue::Value(0.0));
        // Only the bare literal is a sentinel
        assert_eq!(plain("0,00").unwrap(), NormalizedValue::Value(0.0));
    }

    #[test_case("R$ 12,10", 12.10)]
    #[test_case("-R$ 63.526.000,00", -63_526_000.0)]
    #[test_case("R$ -1,50", -1.5)]
    #[test_case("R$\u{a0}1.234,56", 1234.56)]
    #[test_case("1,17", 1.17)]
    #[test_case("1.7", 1.7)]
    #[test_case("63.526.000", 63_526_000.0)]
    #[test_case("+3,5", 3.5)]
    #[test_case("  -0,25  ", -0.25)]
    #[test_case("25%", 25.0 ; "percent kept as points")]
    #[test_case("1e3", 1000.0)]
    fn test_plain_values(raw: &str, expected: f64) {
        assert_close(plain(raw).unwrap().or_zero(), expected);
    }

    #[test_case("25%", 0.25)]
    #[test_case("-55,04%", -0.5504)]
    #[test_case("1.234,5%", 12.345)]
    #[test_case("7,3", 0.073 ; "no percent sign")]
    #[test_case("0,00%", 0.0)]
    fn test_fraction_values(raw: &str, expected: f64) {
        assert_close(fraction(raw).unwrap().or_zero(), expected);
    }

    #[test]
    fn test_numbers_bypass_cleanup() {
        assert_eq!(fraction(0.35).unwrap(), NormalizedValue::Value(0.35));
        assert_eq!(plain(0.0).unwrap(), NormalizedValue::Value(0.0));
        assert!(plain(f64::NAN).is_err());
        assert!(plain(f64::INFINITY).is_err());
    }

    #[test]
    fn test_without_locale_cleanup() {
        let options = NormalizeOptions {
            locale_cleanup: false,
            ..NormalizeOptions::default()
        };
        assert_close(normalize(&"1.5".into(), &options).unwrap().or_zero(), 1.5);
        assert_close(normalize(&"-2%".into(), &options).unwrap().or_zero(), -2.0);
        assert!(normalize(&"1,5".into(), &options).is_err());
        // The currency marker is stripped either way
        assert_close(normalize(&"R$ 1.5".into(), &options).unwrap().or_zero(), 1.5);
        assert_close(normalize(&"R$ 12.10".into(), &options).unwrap().or_zero(), 12.10);
        assert_close(normalize(&"-R$ 3".into(), &options).unwrap().or_zero(), -3.0);
    }

    #[test_case("invalido")]
    #[test_case("R$")]
    #[test_case("12,3x")]
    #[test_case("inf")]
    #[test_case("NaN")]
    #[test_case("1,2,3")]
    fn test_parse_failures(raw: &str) {
        let err = plain(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn test_error_carries_context() {
        let context = NormalizationContext::new("P/L", Some("PETR4"));
        let err = normalize_with_context(
            &"abc".into(),
            &NormalizeOptions::default(),
            &context,
        )
        .unwrap_err();
        assert_eq!(err.context, context);
        let message = err.to_string();
        assert!(message.contains("\"abc\""));
        assert!(message.contains("P/L of PETR4"));
    }

    #[test]
    fn test_normalize_or_zero() {
        let context = NormalizationContext::for_instrument("VALE3");
        let options = NormalizeOptions::default();
        assert_eq!(normalize_or_zero(&"abc".into(), &options, &context), 0.0);
        assert_eq!(normalize_or_zero(&"--".into(), &options, &context), 0.0);
        assert_close(normalize_or_zero(&"4,2".into(), &options, &context), 4.2);
    }

    #[test]
    fn test_options_from_config() {
        let config = NormalizerConfig {
            locale_cleanup: false,
            zero_is_missing: false,
        };
        let options = NormalizeOptions::from(&config);
        assert_eq!(options.mode, NormalizeMode::Plain);
        assert!(!options.locale_cleanup);
        assert!(!options.zero_is_missing);
    }
}
