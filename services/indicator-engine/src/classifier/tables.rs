//! Default threshold tables.
//!
//! One canonical table per metric. Multiples are in plain units, percentages
//! as fractions (0.15 = 15%). Every table starts at -inf and ends at +inf.

use super::band::Band;
use super::label::Classification::{
    Alto, Bom, Critico, Elevado, Excessivo, Moderado, MuitoBom, MuitoCritico, Negativo, Nula,
    Otimo, Ruim,
};
use super::metric::Metric;

const NEG: f64 = f64::NEG_INFINITY;
const POS: f64 = f64::INFINITY;

const PRICE_TO_EARNINGS: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 10.0, Otimo),
    Band::new(10.0, 15.0, Bom),
    Band::new(15.0, 20.0, Moderado),
    Band::new(20.0, 25.0, Elevado),
    Band::new(25.0, POS, Excessivo),
];

const PRICE_TO_BOOK: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 1.0, Otimo),
    Band::new(1.0, 2.0, Bom),
    Band::new(2.0, 3.0, Moderado),
    Band::new(3.0, 5.0, Elevado),
    Band::new(5.0, POS, Excessivo),
];

const EV_TO_EBITDA: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 6.0, Otimo),
    Band::new(6.0, 10.0, Bom),
    Band::new(10.0, 14.0, Moderado),
    Band::new(14.0, POS, Elevado),
];

const PRICE_TO_SALES: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 1.0, Otimo),
    Band::new(1.0, 2.0, Bom),
    Band::new(2.0, 4.0, Moderado),
    Band::new(4.0, POS, Elevado),
];

// Below one basis point the company is effectively not paying dividends.
const DIVIDEND_YIELD: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.0001, Nula),
    Band::new(0.0001, 0.03, Ruim),
    Band::new(0.03, 0.06, Bom),
    Band::new(0.06, 0.12, Otimo),
    Band::new(0.12, POS, Alto),
];

const ROE: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.05, Ruim),
    Band::new(0.05, 0.10, Moderado),
    Band::new(0.10, 0.15, Bom),
    Band::new(0.15, 0.20, MuitoBom),
    Band::new(0.20, POS, Otimo),
];

const ROA: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.02, Ruim),
    Band::new(0.02, 0.05, Moderado),
    Band::new(0.05, 0.10, Bom),
    Band::new(0.10, POS, Otimo),
];

const ROIC: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.05, Ruim),
    Band::new(0.05, 0.10, Moderado),
    Band::new(0.10, 0.15, Bom),
    Band::new(0.15, 0.20, MuitoBom),
    Band::new(0.20, POS, Otimo),
];

const GROSS_MARGIN: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.15, Ruim),
    Band::new(0.15, 0.30, Moderado),
    Band::new(0.30, 0.50, Bom),
    Band::new(0.50, POS, Otimo),
];

const EBITDA_MARGIN: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.10, Ruim),
    Band::new(0.10, 0.20, Moderado),
    Band::new(0.20, 0.30, Bom),
    Band::new(0.30, 0.40, MuitoBom),
    Band::new(0.40, POS, Otimo),
];

const EBIT_MARGIN: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.05, Ruim),
    Band::new(0.05, 0.15, Moderado),
    Band::new(0.15, 0.25, Bom),
    Band::new(0.25, POS, Otimo),
];

const NET_MARGIN: &[Band] = &[
    Band::new(NEG, 0.0, Negativo),
    Band::new(0.0, 0.05, Ruim),
    Band::new(0.05, 0.10, Moderado),
    Band::new(0.10, 0.20, Bom),
    Band::new(0.20, POS, Otimo),
];

// Negative net debt means net cash.
const NET_DEBT_TO_EBITDA: &[Band] = &[
    Band::new(NEG, 0.0, Otimo),
    Band::new(0.0, 1.0, Bom),
    Band::new(1.0, 2.0, Moderado),
    Band::new(2.0, 3.0, Elevado),
    Band::new(3.0, 4.0, Critico),
    Band::new(4.0, POS, MuitoCritico),
];

const NET_DEBT_TO_EQUITY: &[Band] = &[
    Band::new(NEG, 0.0, Otimo),
    Band::new(0.0, 0.5, Bom),
    Band::new(0.5, 1.0, Moderado),
    Band::new(1.0, 2.0, Elevado),
    Band::new(2.0, POS, Critico),
];

const LIABILITIES_TO_ASSETS: &[Band] = &[
    Band::new(NEG, 0.3, Otimo),
    Band::new(0.3, 0.5, Bom),
    Band::new(0.5, 0.7, Moderado),
    Band::new(0.7, 0.9, Elevado),
    Band::new(0.9, POS, Critico),
];

const CURRENT_LIQUIDITY: &[Band] = &[
    Band::new(NEG, 0.5, Critico),
    Band::new(0.5, 1.0, Ruim),
    Band::new(1.0, 1.5, Moderado),
    Band::new(1.5, 2.0, Bom),
    Band::new(2.0, POS, Otimo),
];

/// Default bands for a metric.
pub const fn default_bands(metric: Metric) -> &'static [Band] {
    match metric {
        Metric::PriceToEarnings => PRICE_TO_EARNINGS,
        Metric::PriceToBook => PRICE_TO_BOOK,
        Metric::EvToEbitda => EV_TO_EBITDA,
        Metric::PriceToSales => PRICE_TO_SALES,
        Metric::DividendYield => DIVIDEND_YIELD,
        Metric::Roe => ROE,
        Metric::Roa => ROA,
        Metric::Roic => ROIC,
        Metric::GrossMargin => GROSS_MARGIN,
        Metric::EbitdaMargin => EBITDA_MARGIN,
        Metric::EbitMargin => EBIT_MARGIN,
        Metric::NetMargin => NET_MARGIN,
        Metric::NetDebtToEbitda => NET_DEBT_TO_EBITDA,
        Metric::NetDebtToEquity => NET_DEBT_TO_EQUITY,
        Metric::LiabilitiesToAssets => LIABILITIES_TO_ASSETS,
        Metric::CurrentLiquidity => CURRENT_LIQUIDITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::band::{check_bands, find_band};
    use crate::classifier::label::Classification;
    use test_case::test_case;

    #[test]
    fn test_default_tables_are_well_formed() {
        for metric in Metric::ALL {
            let bands = default_bands(metric);
            assert!(
                (4..=7).contains(&bands.len()),
                "{metric} has {} bands",
                bands.len()
            );
            if let Err(reason) = check_bands(bands) {
                panic!("{metric}: {reason}");
            }
        }
    }

    #[test_case(Metric::PriceToEarnings, 5.0, Classification::Otimo)]
    #[test_case(Metric::PriceToEarnings, 12.0, Classification::Bom)]
    #[test_case(Metric::PriceToEarnings, 30.0, Classification::Excessivo)]
    #[test_case(Metric::PriceToEarnings, -3.0, Classification::Negativo)]
    #[test_case(Metric::PriceToEarnings, 10.0, Classification::Bom ; "lower bound is inclusive")]
    #[test_case(Metric::PriceToBook, 0.8, Classification::Otimo)]
    #[test_case(Metric::DividendYield, 0.0, Classification::Nula)]
    #[test_case(Metric::DividendYield, 0.07, Classification::Otimo)]
    #[test_case(Metric::DividendYield, 0.2, Classification::Alto)]
    #[test_case(Metric::Roe, 0.18, Classification::MuitoBom)]
    #[test_case(Metric::NetMargin, -0.5504, Classification::Negativo)]
    #[test_case(Metric::NetDebtToEbitda, -0.4, Classification::Otimo)]
    #[test_case(Metric::NetDebtToEbitda, 4.5, Classification::MuitoCritico)]
    #[test_case(Metric::CurrentLiquidity, 0.3, Classification::Critico)]
    #[test_case(Metric::LiabilitiesToAssets, 0.95, Classification::Critico)]
    fn test_default_classification(metric: Metric, value: f64, expected: Classification) {
        let band = find_band(default_bands(metric), value).unwrap();
        assert_eq!(band.label, expected);
    }
}
