//! Classification labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fold_key;

/// Qualitative bucket a ratio falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Ótimo")]
    Otimo,
    #[serde(rename = "Muito Bom")]
    MuitoBom,
    Bom,
    Moderado,
    Ruim,
    #[serde(rename = "Crítico")]
    Critico,
    #[serde(rename = "Muito Crítico")]
    MuitoCritico,
    Elevado,
    Excessivo,
    Alto,
    Negativo,
    Nula,
    /// Input could not be evaluated
    Erro,
    /// Input was missing and the missing policy reports it as such
    #[serde(rename = "Sem dados")]
    SemDados,
}

impl Classification {
    pub const ALL: [Classification; 14] = [
        Self::Otimo,
        Self::MuitoBom,
        Self::Bom,
        Self::Moderado,
        Self::Ruim,
        Self::Critico,
        Self::MuitoCritico,
        Self::Elevado,
        Self::Excessivo,
        Self::Alto,
        Self::Negativo,
        Self::Nula,
        Self::Erro,
        Self::SemDados,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Otimo => "Ótimo",
            Self::MuitoBom => "Muito Bom",
            Self::Bom => "Bom",
            Self::Moderado => "Moderado",
            Self::Ruim => "Ruim",
            Self::Critico => "Crítico",
            Self::MuitoCritico => "Muito Crítico",
            Self::Elevado => "Elevado",
            Self::Excessivo => "Excessivo",
            Self::Alto => "Alto",
            Self::Negativo => "Negativo",
            Self::Nula => "Nula",
            Self::Erro => "Erro",
            Self::SemDados => "Sem dados",
        }
    }

    /// Labels that only describe the input, never a threshold band.
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Erro | Self::SemDados)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    /// Accepts the display name with or without accents, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_key(s);
        Self::ALL
            .into_iter()
            .find(|label| fold_key(label.as_str()) == key)
            .ok_or_else(|| format!("unknown classification '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for label in Classification::ALL {
            assert_eq!(label.as_str().parse::<Classification>().unwrap(), label);
        }
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("otimo".parse::<Classification>().unwrap(), Classification::Otimo);
        assert_eq!(
            "MUITO CRITICO".parse::<Classification>().unwrap(),
            Classification::MuitoCritico
        );
        assert!("Excelente".parse::<Classification>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Classification::Otimo).unwrap();
        assert_eq!(json, "\"Ótimo\"");
        let parsed: Classification = serde_json::from_str("\"Sem dados\"").unwrap();
        assert_eq!(parsed, Classification::SemDados);
        assert!(parsed.is_sentinel());
        assert!(!Classification::Negativo.is_sentinel());
    }
}
