//! Demographics Reporter
//! Sex, age bracket and income bracket distributions.

use crate::charts::StaticChartRenderer;
use crate::config::AnalysisConfig;
use crate::data::codes::{AGE_BRACKET, INCOME_DISPLAY_ORDER};
use crate::data::columns;
use crate::data::value::column_labels;
use crate::report::{print_lines, saved_chart};
use crate::stats::Tally;
use polars::prelude::*;
use std::path::PathBuf;

pub const SEX_CHART: &str = "distribuicao_sexo.png";
pub const AGE_BRACKET_CHART: &str = "distribuicao_faixa_etaria.png";
pub const INCOME_CHART: &str = "distribuicao_renda.png";

/// Category tallies; `None` when the category column is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemographicsSummary {
    pub sex: Option<Tally>,
    pub age_bracket: Option<Tally>,
    pub income_bracket: Option<Tally>,
}

impl DemographicsSummary {
    /// Sex counts, largest first.
    pub fn sex_counts(&self) -> Option<Vec<(String, usize)>> {
        self.sex.as_ref().map(Tally::sorted_desc)
    }

    /// Age bracket counts in code order, zero rows included.
    pub fn age_bracket_counts(&self) -> Option<Vec<(String, usize)>> {
        let order = AGE_BRACKET.labels();
        self.age_bracket.as_ref().map(|t| t.ordered_by(&order))
    }

    /// Income counts in display order, zero rows included.
    pub fn income_bracket_counts(&self) -> Option<Vec<(String, usize)>> {
        self.income_bracket
            .as_ref()
            .map(|t| t.ordered_by(&INCOME_DISPLAY_ORDER))
    }
}

fn tally_column(df: &DataFrame, name: &str) -> PolarsResult<Option<Tally>> {
    Ok(column_labels(df, name)?.map(Tally::from_labels))
}

pub fn summarize(df: &DataFrame) -> PolarsResult<DemographicsSummary> {
    Ok(DemographicsSummary {
        sex: tally_column(df, columns::SEX_CATEGORY)?,
        age_bracket: tally_column(df, columns::AGE_BRACKET_CATEGORY)?,
        income_bracket: tally_column(df, columns::INCOME_BRACKET_CATEGORY)?,
    })
}

fn push_counts(lines: &mut Vec<String>, heading: &str, counts: &[(String, usize)]) {
    lines.push(String::new());
    lines.push(format!("{}:", heading));
    for (label, count) in counts.iter().filter(|(_, count)| *count > 0) {
        lines.push(format!("{}: {}", label, count));
    }
}

/// Console text for the demographics section.
pub fn report_lines(summary: &DemographicsSummary) -> Vec<String> {
    let mut lines = vec![String::new(), "===== ANÁLISE DEMOGRÁFICA =====".to_string()];

    if let Some(counts) = summary.sex_counts() {
        push_counts(&mut lines, "Distribuição por Sexo", &counts);
    }
    if let Some(counts) = summary.age_bracket_counts() {
        push_counts(&mut lines, "Distribuição por Faixa Etária", &counts);
    }
    if let Some(counts) = summary.income_bracket_counts() {
        push_counts(&mut lines, "Distribuição por Renda", &counts);
    }
    lines
}

pub fn print(summary: &DemographicsSummary) {
    print_lines(&report_lines(summary));
}

/// Write the sex pie chart and the age/income bar charts.
pub fn render(summary: &DemographicsSummary, config: &AnalysisConfig) -> Vec<PathBuf> {
    let mut written = Vec::new();

    if let Some(counts) = summary.sex_counts() {
        let path = config.chart_path(SEX_CHART);
        let result = StaticChartRenderer::render_pie_chart(
            &path,
            "Distribuição por Sexo",
            &counts,
            config.chart_size,
        );
        written.extend(saved_chart(path, result));
    }

    if let Some(counts) = summary.age_bracket_counts() {
        let path = config.chart_path(AGE_BRACKET_CHART);
        let result = StaticChartRenderer::render_bar_chart(
            &path,
            "Distribuição por Faixa Etária",
            &counts,
            config.chart_size,
            true,
        );
        written.extend(saved_chart(path, result));
    }

    if let Some(counts) = summary.income_bracket_counts() {
        let path = config.chart_path(INCOME_CHART);
        let result = StaticChartRenderer::render_bar_chart(
            &path,
            "Distribuição por Renda (Salários Mínimos)",
            &counts,
            config.chart_size,
            true,
        );
        written.extend(saved_chart(path, result));
    }

    written
}
