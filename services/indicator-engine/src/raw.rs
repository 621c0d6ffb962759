//! Raw indicator values as delivered by a scrape or a spreadsheet cell.

use serde::{Deserialize, Serialize};

/// An untyped indicator value.
///
/// Deserializes from JSON `null`, a number, or a string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIndicator {
    /// No value at all (null / absent cell)
    #[default]
    Absent,
    /// Already numeric (spreadsheet number cell)
    Number(f64),
    /// Text as scraped, e.g. "R$ 12,10", "-55,04%", "--"
    Text(String),
}

impl RawIndicator {
    /// Raw value rendered for diagnostics.
    pub fn display(&self) -> String {
        match self {
            Self::Absent => "<absent>".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for RawIndicator {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawIndicator {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawIndicator {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawIndicator>> From<Option<T>> for RawIndicator {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<RawIndicator> =
            serde_json::from_str(r#"[null, 12.5, "R$ 12,10", 3]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawIndicator::Absent,
                RawIndicator::Number(12.5),
                RawIndicator::Text("R$ 12,10".into()),
                RawIndicator::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(RawIndicator::from(None::<&str>), RawIndicator::Absent);
        assert_eq!(RawIndicator::from(Some(1.5)), RawIndicator::Number(1.5));
        assert_eq!(RawIndicator::from("--").display(), "--");
        assert_eq!(RawIndicator::Absent.display(), "<absent>");
    }
}
