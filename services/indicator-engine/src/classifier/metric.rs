//! Financial metrics known to the classifier.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::fold_key;
use crate::normalizer::NormalizeMode;

/// Grouping tag shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricGroup {
    Valuation,
    Rentabilidade,
    #[serde(rename = "Eficiência")]
    Eficiencia,
    Endividamento,
    Liquidez,
}

impl fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valuation => write!(f, "Valuation"),
            Self::Rentabilidade => write!(f, "Rentabilidade"),
            Self::Eficiencia => write!(f, "Eficiência"),
            Self::Endividamento => write!(f, "Endividamento"),
            Self::Liquidez => write!(f, "Liquidez"),
        }
    }
}

/// Unit a metric's value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain multiple, e.g. P/L = 12.5
    Multiple,
    /// Percentage, carried as a fraction (0.25 = 25%)
    Percentage,
}

impl ValueKind {
    pub const fn normalize_mode(&self) -> NormalizeMode {
        match self {
            Self::Multiple => NormalizeMode::Plain,
            Self::Percentage => NormalizeMode::PercentFraction,
        }
    }
}

/// How a metric can be computed from two raw fields.
///
/// Field names are given in folded form (see [`fold_key`]). The denominator must be
/// positive: revenue, equity, assets, EBITDA, current liabilities and price below
/// zero make the ratio meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    pub numerator: &'static [&'static str],
    pub denominator: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    PriceToEarnings,
    PriceToBook,
    EvToEbitda,
    PriceToSales,
    DividendYield,
    Roe,
    Roa,
    Roic,
    GrossMargin,
    EbitdaMargin,
    EbitMargin,
    NetMargin,
    NetDebtToEbitda,
    NetDebtToEquity,
    LiabilitiesToAssets,
    CurrentLiquidity,
}

impl Metric {
    pub const ALL: [Metric; 16] = [
        Self::PriceToEarnings,
        Self::PriceToBook,
        Self::EvToEbitda,
        Self::PriceToSales,
        Self::DividendYield,
        Self::Roe,
        Self::Roa,
        Self::Roic,
        Self::GrossMargin,
        Self::EbitdaMargin,
        Self::EbitMargin,
        Self::NetMargin,
        Self::NetDebtToEbitda,
        Self::NetDebtToEquity,
        Self::LiabilitiesToAssets,
        Self::CurrentLiquidity,
    ];

    /// Display name, as printed on fundamentals pages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PriceToEarnings => "P/L",
            Self::PriceToBook => "P/VP",
            Self::EvToEbitda => "EV/EBITDA",
            Self::PriceToSales => "PSR",
            Self::DividendYield => "Dividend Yield",
            Self::Roe => "ROE",
            Self::Roa => "ROA",
            Self::Roic => "ROIC",
            Self::GrossMargin => "Margem Bruta",
            Self::EbitdaMargin => "Margem EBITDA",
            Self::EbitMargin => "Margem EBIT",
            Self::NetMargin => "Margem Líquida",
            Self::NetDebtToEbitda => "Dívida Líquida/EBITDA",
            Self::NetDebtToEquity => "Dívida Líquida/Patrimônio",
            Self::LiabilitiesToAssets => "Passivo/Ativo",
            Self::CurrentLiquidity => "Liquidez Corrente",
        }
    }

    pub const fn group(&self) -> MetricGroup {
        match self {
            Self::PriceToEarnings
            | Self::PriceToBook
            | Self::EvToEbitda
            | Self::PriceToSales
            | Self::DividendYield => MetricGroup::Valuation,
            Self::Roe | Self::Roa | Self::Roic => MetricGroup::Rentabilidade,
            Self::GrossMargin | Self::EbitdaMargin | Self::EbitMargin | Self::NetMargin => {
                MetricGroup::Eficiencia
            }
            Self::NetDebtToEbitda | Self::NetDebtToEquity | Self::LiabilitiesToAssets => {
                MetricGroup::Endividamento
            }
            Self::CurrentLiquidity => MetricGroup::Liquidez,
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::DividendYield
            | Self::Roe
            | Self::Roa
            | Self::Roic
            | Self::GrossMargin
            | Self::EbitdaMargin
            | Self::EbitMargin
            | Self::NetMargin => ValueKind::Percentage,
            _ => ValueKind::Multiple,
        }
    }

    /// Alternative field names, folded. The folded display name always matches too.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::PriceToEarnings => &["pl", "precolucro", "pe"],
            Self::PriceToBook => &["pvp", "precovalorpatrimonial", "pb"],
            Self::EvToEbitda => &["evebitda"],
            Self::PriceToSales => &["psr", "precoreceita"],
            Self::DividendYield => &["dy", "dividendyield", "divyield"],
            Self::Roe => &["roe"],
            Self::Roa => &["roa"],
            Self::Roic => &["roic"],
            Self::GrossMargin => &["margembruta", "mrgbruta"],
            Self::EbitdaMargin => &["margemebitda", "mrgebitda"],
            Self::EbitMargin => &["margemebit", "mrgebit"],
            Self::NetMargin => &["margemliquida", "mrgliquida", "mrgliq"],
            Self::NetDebtToEbitda => &["dividaliquidaebitda", "divliquidaebitda", "dlebitda"],
            Self::NetDebtToEquity => &[
                "dividaliquidapatrimonio",
                "divliquidapatrim",
                "dlpl",
            ],
            Self::LiabilitiesToAssets => &["passivoativo", "passivosativos"],
            Self::CurrentLiquidity => &["liquidezcorrente", "liqcorrente", "liqcorr"],
        }
    }

    /// Component fields the metric can be derived from, if any.
    pub fn derivation(&self) -> Option<Derivation> {
        const RECEITA: &[&str] = &["receitaliquida", "receita"];
        const LUCRO_LIQUIDO: &[&str] = &["lucroliquido"];
        const LUCRO_BRUTO: &[&str] = &["lucrobruto"];
        const EBITDA: &[&str] = &["ebitda"];
        const EBIT: &[&str] = &["ebit"];
        const PATRIMONIO: &[&str] = &["patrimonioliquido", "patrimliq"];
        const ATIVO: &[&str] = &["ativototal", "ativo"];
        const PASSIVO: &[&str] = &["passivototal", "passivo"];
        const ATIVO_CIRCULANTE: &[&str] = &["ativocirculante"];
        const PASSIVO_CIRCULANTE: &[&str] = &["passivocirculante"];
        const DIVIDA_LIQUIDA: &[&str] = &["dividaliquida", "divliquida"];
        const DIVIDENDOS: &[&str] = &["dividendosporacao", "dpa"];
        const COTACAO: &[&str] = &["cotacao", "preco"];

        let (numerator, denominator) = match self {
            Self::DividendYield => (DIVIDENDOS, COTACAO),
            Self::Roe => (LUCRO_LIQUIDO, PATRIMONIO),
            Self::Roa => (LUCRO_LIQUIDO, ATIVO),
            Self::GrossMargin => (LUCRO_BRUTO, RECEITA),
            Self::EbitdaMargin => (EBITDA, RECEITA),
            Self::EbitMargin => (EBIT, RECEITA),
            Self::NetMargin => (LUCRO_LIQUIDO, RECEITA),
            Self::NetDebtToEbitda => (DIVIDA_LIQUIDA, EBITDA),
            Self::NetDebtToEquity => (DIVIDA_LIQUIDA, PATRIMONIO),
            Self::LiabilitiesToAssets => (PASSIVO, ATIVO),
            Self::CurrentLiquidity => (ATIVO_CIRCULANTE, PASSIVO_CIRCULANTE),
            Self::PriceToEarnings
            | Self::PriceToBook
            | Self::EvToEbitda
            | Self::PriceToSales
            | Self::Roic => return None,
        };

        Some(Derivation {
            numerator,
            denominator,
        })
    }

    /// Resolve a field name ("P/L", "p_l", "Margem Líquida", ...) to a metric.
    pub fn from_field(name: &str) -> Option<Metric> {
        let key = fold_key(name);
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|metric| fold_key(metric.name()) == key || metric.aliases().contains(&key.as_str()))
    }

    /// Whether a field name is a component of some metric's derivation.
    pub fn is_component_field(name: &str) -> bool {
        let key = fold_key(name);
        Self::ALL.into_iter().filter_map(|m| m.derivation()).any(|d| {
            d.numerator.contains(&key.as_str()) || d.denominator.contains(&key.as_str())
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_field(s).ok_or_else(|| format!("unknown metric '{s}'"))
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
