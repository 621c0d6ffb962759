//! Static descriptive text attached to classification results.
//!
//! Two lookups: a per-metric profile (definition, formula, risks, related
//! metrics) and a per-(metric, label) description with a recommendation.

use super::label::Classification::{self, *};
use super::metric::Metric;

/// What a metric is, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricProfile {
    pub definition: &'static str,
    pub formula: &'static str,
    pub risks: &'static str,
    pub cross_references: &'static str,
}

/// What a label means for a given metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCommentary {
    pub description: &'static str,
    pub recommendation: &'static str,
}

pub const fn profile(metric: Metric) -> MetricProfile {
    match metric {
        Metric::PriceToEarnings => MetricProfile {
            definition: "Quantos anos de lucro atual o mercado paga pela ação.",
            formula: "P/L = Preço da ação / Lucro por ação (LPA)",
            risks: "Lucros não recorrentes distorcem o indicador; empresas cíclicas parecem baratas no pico do ciclo.",
            cross_references: "Compare com ROE, Margem Líquida e EV/EBITDA.",
        },
        Metric::PriceToBook => MetricProfile {
            definition: "Quanto o mercado paga por real de patrimônio contábil.",
            formula: "P/VP = Preço da ação / Valor patrimonial por ação (VPA)",
            risks: "Patrimônio pode conter ativos superavaliados ou intangíveis difíceis de realizar.",
            cross_references: "Leia junto com ROE: P/VP alto só se justifica com retorno alto.",
        },
        Metric::EvToEbitda => MetricProfile {
            definition: "Valor da firma em relação à geração de caixa operacional.",
            formula: "EV/EBITDA = (Valor de mercado + Dívida líquida) / EBITDA",
            risks: "EBITDA ignora investimentos, impostos e juros; setores intensivos em capital parecem baratos.",
            cross_references: "Compare com P/L e Dívida Líquida/EBITDA.",
        },
        Metric::PriceToSales => MetricProfile {
            definition: "Quanto o mercado paga por real de receita.",
            formula: "PSR = Valor de mercado / Receita líquida",
            risks: "Não considera rentabilidade; receita alta com margem baixa engana.",
            cross_references: "Leia junto com Margem Líquida e Margem EBITDA.",
        },
        Metric::DividendYield => MetricProfile {
            definition: "Retorno em dividendos em relação ao preço da ação.",
            formula: "DY = Dividendos por ação nos últimos 12 meses / Preço da ação",
            risks: "Dividendos extraordinários inflam o indicador; queda do preço também o eleva.",
            cross_references: "Verifique payout, Margem Líquida e Dívida Líquida/EBITDA.",
        },
        Metric::Roe => MetricProfile {
            definition: "Retorno gerado sobre o capital dos acionistas.",
            formula: "ROE = Lucro líquido / Patrimônio líquido",
            risks: "Alavancagem eleva o ROE artificialmente; patrimônio pequeno distorce o resultado.",
            cross_references: "Compare com ROA, ROIC e Dívida Líquida/Patrimônio.",
        },
        Metric::Roa => MetricProfile {
            definition: "Eficiência no uso de todos os ativos da empresa.",
            formula: "ROA = Lucro líquido / Ativo total",
            risks: "Bancos e seguradoras têm ROA naturalmente baixo; compare dentro do setor.",
            cross_references: "Leia junto com ROE e Passivo/Ativo.",
        },
        Metric::Roic => MetricProfile {
            definition: "Retorno sobre todo o capital investido na operação.",
            formula: "ROIC = NOPAT / (Patrimônio líquido + Dívida líquida)",
            risks: "Capital investido varia conforme a metodologia; ágio de aquisições pesa no denominador.",
            cross_references: "Compare com ROE e com o custo de capital da empresa.",
        },
        Metric::GrossMargin => MetricProfile {
            definition: "Parcela da receita que sobra após o custo dos produtos vendidos.",
            formula: "Margem Bruta = Lucro bruto / Receita líquida",
            risks: "Varia muito entre setores; commodities têm margens voláteis.",
            cross_references: "Compare com Margem EBITDA e Margem Líquida.",
        },
        Metric::EbitdaMargin => MetricProfile {
            definition: "Geração de caixa operacional por real de receita.",
            formula: "Margem EBITDA = EBITDA / Receita líquida",
            risks: "Não reflete investimentos de manutenção nem despesas financeiras.",
            cross_references: "Leia junto com Dívida Líquida/EBITDA e Margem EBIT.",
        },
        Metric::EbitMargin => MetricProfile {
            definition: "Lucro operacional por real de receita.",
            formula: "Margem EBIT = EBIT / Receita líquida",
            risks: "Itens não recorrentes operacionais podem distorcer o resultado.",
            cross_references: "Compare com Margem EBITDA e ROIC.",
        },
        Metric::NetMargin => MetricProfile {
            definition: "Parcela da receita que vira lucro para o acionista.",
            formula: "Margem Líquida = Lucro líquido / Receita líquida",
            risks: "Resultado financeiro e efeitos fiscais pontuais afetam o indicador.",
            cross_references: "Compare com ROE, P/L e Margem EBIT.",
        },
        Metric::NetDebtToEbitda => MetricProfile {
            definition: "Anos de geração de caixa necessários para quitar a dívida líquida.",
            formula: "Dívida Líquida/EBITDA = (Dívida bruta - Caixa) / EBITDA",
            risks: "EBITDA em queda piora o indicador rapidamente; covenants costumam usar 3x como limite.",
            cross_references: "Leia junto com Margem EBITDA e Liquidez Corrente.",
        },
        Metric::NetDebtToEquity => MetricProfile {
            definition: "Endividamento líquido em relação ao capital próprio.",
            formula: "Dívida Líquida/Patrimônio = (Dívida bruta - Caixa) / Patrimônio líquido",
            risks: "Patrimônio negativo torna o indicador sem significado.",
            cross_references: "Compare com ROE e Dívida Líquida/EBITDA.",
        },
        Metric::LiabilitiesToAssets => MetricProfile {
            definition: "Fração dos ativos financiada por terceiros.",
            formula: "Passivo/Ativo = Passivo total / Ativo total",
            risks: "Bancos operam com passivos elevados por natureza; compare dentro do setor.",
            cross_references: "Leia junto com ROA e Liquidez Corrente.",
        },
        Metric::CurrentLiquidity => MetricProfile {
            definition: "Capacidade de pagar obrigações de curto prazo com ativos de curto prazo.",
            formula: "Liquidez Corrente = Ativo circulante / Passivo circulante",
            risks: "Estoques de baixa liquidez inflam o ativo circulante.",
            cross_references: "Compare com Dívida Líquida/EBITDA e Passivo/Ativo.",
        },
    }
}

const fn text(description: &'static str, recommendation: &'static str) -> LabelCommentary {
    LabelCommentary {
        description,
        recommendation,
    }
}

const COMMENTARY: &[(Metric, Classification, LabelCommentary)] = &[
    // P/L
    (Metric::PriceToEarnings, Negativo, text("Empresa com prejuízo no período.", "Investigue a origem do prejuízo antes de qualquer decisão.")),
    (Metric::PriceToEarnings, Otimo, text("Ação negociada a múltiplo baixo de lucro.", "Confirme se o lucro é recorrente; pode ser oportunidade.")),
    (Metric::PriceToEarnings, Bom, text("Múltiplo de lucro razoável.", "Preço justo para empresas estáveis; compare com o setor.")),
    (Metric::PriceToEarnings, Moderado, text("Mercado já precifica algum crescimento.", "Exija crescimento de lucro consistente para justificar o preço.")),
    (Metric::PriceToEarnings, Elevado, text("Múltiplo alto em relação ao lucro atual.", "Cautela: o preço depende de expectativas otimistas.")),
    (Metric::PriceToEarnings, Excessivo, text("Preço muito acima do lucro atual.", "Evite sem tese clara de crescimento acelerado.")),
    // P/VP
    (Metric::PriceToBook, Negativo, text("Patrimônio líquido negativo.", "Sinal de fragilidade patrimonial; evite sem plano de reestruturação.")),
    (Metric::PriceToBook, Otimo, text("Ação negociada abaixo do valor patrimonial.", "Verifique a qualidade dos ativos; pode indicar desconto.")),
    (Metric::PriceToBook, Bom, text("Preço próximo do valor patrimonial.", "Patamar confortável se o ROE for adequado.")),
    (Metric::PriceToBook, Moderado, text("Prêmio moderado sobre o patrimônio.", "Justificável apenas com ROE acima da média.")),
    (Metric::PriceToBook, Elevado, text("Prêmio alto sobre o patrimônio.", "Confirme vantagens competitivas sustentáveis.")),
    (Metric::PriceToBook, Excessivo, text("Preço muito acima do patrimônio contábil.", "Risco de correção se o retorno decepcionar.")),
    // EV/EBITDA
    (Metric::EvToEbitda, Negativo, text("EBITDA negativo ou caixa superior ao valor de mercado.", "Analise a geração operacional antes de usar o múltiplo.")),
    (Metric::EvToEbitda, Otimo, text("Firma barata em relação ao caixa operacional.", "Verifique investimentos necessários e endividamento.")),
    (Metric::EvToEbitda, Bom, text("Múltiplo operacional razoável.", "Compare com pares do setor.")),
    (Metric::EvToEbitda, Moderado, text("Firma precificada com prêmio.", "Exija crescimento do EBITDA.")),
    (Metric::EvToEbitda, Elevado, text("Múltiplo operacional alto.", "Cautela com expectativas de crescimento embutidas no preço.")),
    // PSR
    (Metric::PriceToSales, Negativo, text("Valor inconsistente para o indicador.", "Revise os dados de receita e valor de mercado.")),
    (Metric::PriceToSales, Otimo, text("Mercado paga pouco por real de receita.", "Confirme se as margens permitem converter receita em lucro.")),
    (Metric::PriceToSales, Bom, text("Relação preço/receita razoável.", "Avalie junto com a margem líquida.")),
    (Metric::PriceToSales, Moderado, text("Prêmio sobre a receita.", "Justificável para empresas com margens altas.")),
    (Metric::PriceToSales, Elevado, text("Preço alto em relação à receita.", "Exige margens e crescimento excepcionais.")),
    // Dividend Yield
    (Metric::DividendYield, Negativo, text("Valor inconsistente para dividendos.", "Revise os dados de proventos.")),
    (Metric::DividendYield, Nula, text("Empresa não distribuiu dividendos no período.", "Adequado para empresas em crescimento; não serve para renda.")),
    (Metric::DividendYield, Ruim, text("Distribuição baixa de proventos.", "Pouco atrativo para estratégias de renda.")),
    (Metric::DividendYield, Bom, text("Distribuição consistente de proventos.", "Verifique a sustentabilidade do payout.")),
    (Metric::DividendYield, Otimo, text("Retorno em dividendos elevado.", "Confirme que o lucro sustenta a distribuição.")),
    (Metric::DividendYield, Alto, text("Dividendos muito acima do usual.", "Provável evento não recorrente ou queda forte do preço; investigue.")),
    // ROE
    (Metric::Roe, Negativo, text("Empresa destruindo valor do acionista.", "Evite até a recuperação da rentabilidade.")),
    (Metric::Roe, Ruim, text("Retorno abaixo do custo de oportunidade.", "Capital renderia mais em renda fixa.")),
    (Metric::Roe, Moderado, text("Retorno modesto sobre o patrimônio.", "Acompanhe a evolução das margens.")),
    (Metric::Roe, Bom, text("Retorno adequado sobre o patrimônio.", "Verifique se não é fruto de alavancagem.")),
    (Metric::Roe, MuitoBom, text("Retorno acima da média do mercado.", "Bom sinal de vantagem competitiva.")),
    (Metric::Roe, Otimo, text("Retorno excepcional sobre o patrimônio.", "Confirme a recorrência e o nível de endividamento.")),
    // ROA
    (Metric::Roa, Negativo, text("Ativos gerando prejuízo.", "Investigue a eficiência operacional.")),
    (Metric::Roa, Ruim, text("Baixa rentabilidade dos ativos.", "Comum em setores intensivos em capital; compare com pares.")),
    (Metric::Roa, Moderado, text("Rentabilidade moderada dos ativos.", "Acompanhe a eficiência operacional.")),
    (Metric::Roa, Bom, text("Boa rentabilidade dos ativos.", "Sinal de uso eficiente do capital.")),
    (Metric::Roa, Otimo, text("Rentabilidade excelente dos ativos.", "Empresa eficiente; verifique a sustentabilidade.")),
    // ROIC
    (Metric::Roic, Negativo, text("Capital investido gerando prejuízo operacional.", "Evite até a reversão do resultado.")),
    (Metric::Roic, Ruim, text("Retorno provavelmente abaixo do custo de capital.", "Crescimento tende a destruir valor.")),
    (Metric::Roic, Moderado, text("Retorno próximo do custo de capital.", "Acompanhe a alocação de capital.")),
    (Metric::Roic, Bom, text("Retorno acima do custo de capital.", "Empresa cria valor ao crescer.")),
    (Metric::Roic, MuitoBom, text("Retorno alto sobre o capital investido.", "Sinal de vantagem competitiva.")),
    (Metric::Roic, Otimo, text("Retorno excepcional sobre o capital investido.", "Negócio de alta qualidade; confirme a recorrência.")),
    // Margem Bruta
    (Metric::GrossMargin, Negativo, text("Receita não cobre o custo dos produtos.", "Situação crítica; investigue preços e custos.")),
    (Metric::GrossMargin, Ruim, text("Pouca margem sobre o custo dos produtos.", "Negócio sensível a variações de custo.")),
    (Metric::GrossMargin, Moderado, text("Margem bruta intermediária.", "Compare com pares do setor.")),
    (Metric::GrossMargin, Bom, text("Boa margem sobre o custo dos produtos.", "Indica algum poder de precificação.")),
    (Metric::GrossMargin, Otimo, text("Margem bruta muito alta.", "Forte poder de precificação; verifique a sustentabilidade.")),
    // Margem EBITDA
    (Metric::EbitdaMargin, Negativo, text("Operação consumindo caixa.", "Investigue a estrutura de custos.")),
    (Metric::EbitdaMargin, Ruim, text("Baixa geração de caixa operacional.", "Pouca folga para choques de custo.")),
    (Metric::EbitdaMargin, Moderado, text("Geração de caixa operacional intermediária.", "Acompanhe a evolução trimestral.")),
    (Metric::EbitdaMargin, Bom, text("Boa geração de caixa operacional.", "Operação saudável.")),
    (Metric::EbitdaMargin, MuitoBom, text("Geração de caixa operacional forte.", "Sinal de eficiência operacional.")),
    (Metric::EbitdaMargin, Otimo, text("Geração de caixa operacional excepcional.", "Confirme a recorrência das receitas.")),
    // Margem EBIT
    (Metric::EbitMargin, Negativo, text("Prejuízo operacional.", "Investigue custos e despesas operacionais.")),
    (Metric::EbitMargin, Ruim, text("Lucro operacional baixo.", "Operação vulnerável a aumentos de custo.")),
    (Metric::EbitMargin, Moderado, text("Lucro operacional intermediário.", "Compare com pares do setor.")),
    (Metric::EbitMargin, Bom, text("Bom lucro operacional.", "Operação eficiente.")),
    (Metric::EbitMargin, Otimo, text("Lucro operacional excepcional.", "Verifique a sustentabilidade das margens.")),
    // Margem Líquida
    (Metric::NetMargin, Negativo, text("Empresa com prejuízo líquido.", "Investigue a origem do prejuízo.")),
    (Metric::NetMargin, Ruim, text("Pouco lucro por real de receita.", "Resultado sensível a despesas financeiras e impostos.")),
    (Metric::NetMargin, Moderado, text("Margem líquida intermediária.", "Acompanhe a evolução dos custos.")),
    (Metric::NetMargin, Bom, text("Boa conversão de receita em lucro.", "Sinal de rentabilidade saudável.")),
    (Metric::NetMargin, Otimo, text("Margem líquida excepcional.", "Verifique itens não recorrentes.")),
    // Dívida Líquida/EBITDA
    (Metric::NetDebtToEbitda, Otimo, text("Empresa com caixa líquido.", "Estrutura de capital muito conservadora.")),
    (Metric::NetDebtToEbitda, Bom, text("Endividamento baixo em relação à geração de caixa.", "Situação confortável.")),
    (Metric::NetDebtToEbitda, Moderado, text("Endividamento administrável.", "Acompanhe o custo da dívida.")),
    (Metric::NetDebtToEbitda, Elevado, text("Endividamento relevante.", "Verifique prazos e covenants.")),
    (Metric::NetDebtToEbitda, Critico, text("Endividamento alto para a geração de caixa.", "Risco de refinanciamento; cautela.")),
    (Metric::NetDebtToEbitda, MuitoCritico, text("Dívida muito acima da capacidade de pagamento.", "Risco elevado de estresse financeiro; evite.")),
    // Dívida Líquida/Patrimônio
    (Metric::NetDebtToEquity, Otimo, text("Empresa com caixa líquido.", "Estrutura de capital conservadora.")),
    (Metric::NetDebtToEquity, Bom, text("Endividamento baixo em relação ao patrimônio.", "Situação confortável.")),
    (Metric::NetDebtToEquity, Moderado, text("Endividamento moderado.", "Acompanhe a evolução da dívida.")),
    (Metric::NetDebtToEquity, Elevado, text("Dívida próxima ou acima do patrimônio.", "Verifique a capacidade de geração de caixa.")),
    (Metric::NetDebtToEquity, Critico, text("Dívida muito acima do patrimônio.", "Risco financeiro elevado; cautela.")),
    // Passivo/Ativo
    (Metric::LiabilitiesToAssets, Otimo, text("Ativos financiados majoritariamente por capital próprio.", "Estrutura de capital sólida.")),
    (Metric::LiabilitiesToAssets, Bom, text("Financiamento equilibrado.", "Situação confortável.")),
    (Metric::LiabilitiesToAssets, Moderado, text("Maior parte dos ativos financiada por terceiros.", "Acompanhe o perfil da dívida.")),
    (Metric::LiabilitiesToAssets, Elevado, text("Dependência alta de capital de terceiros.", "Verifique prazos e custo do passivo.")),
    (Metric::LiabilitiesToAssets, Critico, text("Passivos próximos ou acima dos ativos.", "Risco de insolvência; cautela.")),
    // Liquidez Corrente
    (Metric::CurrentLiquidity, Critico, text("Ativos de curto prazo muito abaixo das obrigações.", "Risco de liquidez imediato.")),
    (Metric::CurrentLiquidity, Ruim, text("Ativos de curto prazo não cobrem as obrigações.", "Depende de refinanciamento ou geração de caixa.")),
    (Metric::CurrentLiquidity, Moderado, text("Cobertura justa das obrigações de curto prazo.", "Acompanhe o capital de giro.")),
    (Metric::CurrentLiquidity, Bom, text("Boa cobertura das obrigações de curto prazo.", "Situação confortável.")),
    (Metric::CurrentLiquidity, Otimo, text("Folga ampla no curto prazo.", "Verifique se o excesso de caixa está bem alocado.")),
];

const ERROR_TEXT: LabelCommentary = text(
    "Não foi possível avaliar o valor informado.",
    "Revise o dado de origem.",
);

const MISSING_TEXT: LabelCommentary = text(
    "Indicador não disponível na fonte.",
    "Busque o dado em outra fonte antes de concluir.",
);

const GENERIC_TEXT: LabelCommentary = text(
    "Faixa definida pela configuração local.",
    "Consulte os critérios da configuração.",
);

/// Description and recommendation for a label.
///
/// Labels a metric's default table never uses (possible with configured
/// overrides) get a generic text.
pub fn commentary(metric: Metric, label: Classification) -> LabelCommentary {
    match label {
        Erro => ERROR_TEXT,
        SemDados => MISSING_TEXT,
        _ => COMMENTARY
            .iter()
            .find(|(m, l, _)| *m == metric && *l == label)
            .map_or(GENERIC_TEXT, |(_, _, text)| *text),
    }
}
