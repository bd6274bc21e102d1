//! Mobility Reporter
//! Reduced mobility and work/study participation.

use crate::charts::StaticChartRenderer;
use crate::config::AnalysisConfig;
use crate::data::columns;
use crate::data::value::{column_labels, column_values};
use crate::data::SurveyValue;
use crate::report::{print_lines, saved_chart};
use crate::stats::{format_share, Tally};
use log::warn;
use polars::prelude::*;
use std::path::PathBuf;

pub const REDUCED_MOBILITY_CHART: &str = "mobilidade_reduzida.png";
pub const ACTIVITY_CHART: &str = "distribuicao_atividades.png";

/// Work and study participation, computed once per run.
///
/// Shared by the mobility report (shares of all rows) and the transport
/// report (denominators for mode percentages).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTotals {
    pub total_rows: usize,
    pub works: usize,
    pub studies: usize,
    pub works_and_studies: usize,
}

fn flagged(values: &Option<Vec<SurveyValue>>, row: usize) -> bool {
    values
        .as_ref()
        .and_then(|v| v.get(row))
        .and_then(SurveyValue::code)
        == Some(1)
}

impl ActivityTotals {
    /// Count rows answering 1 to `trabalha` and `pesquisado_estuda`.
    ///
    /// An absent flag column counts as nobody answering yes.
    pub fn compute(df: &DataFrame) -> PolarsResult<Self> {
        let works = column_values(df, columns::WORKS)?;
        let studies = column_values(df, columns::STUDIES)?;

        if works.is_none() {
            warn!("Column `{}` absent, counting no workers", columns::WORKS);
        }
        if studies.is_none() {
            warn!("Column `{}` absent, counting no students", columns::STUDIES);
        }

        let mut totals = ActivityTotals {
            total_rows: df.height(),
            ..Self::default()
        };
        for row in 0..df.height() {
            let w = flagged(&works, row);
            let s = flagged(&studies, row);
            totals.works += usize::from(w);
            totals.studies += usize::from(s);
            totals.works_and_studies += usize::from(w && s);
        }
        Ok(totals)
    }

    /// Bars for the activity chart.
    pub fn chart_entries(&self) -> Vec<(String, usize)> {
        vec![
            ("Trabalham".to_string(), self.works),
            ("Estudam".to_string(), self.studies),
            ("Trabalham e estudam".to_string(), self.works_and_studies),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobilitySummary {
    /// `None` when the reduced mobility column is absent.
    pub reduced_mobility: Option<Tally>,
    pub activities: ActivityTotals,
}

pub fn summarize(df: &DataFrame, activities: ActivityTotals) -> PolarsResult<MobilitySummary> {
    let reduced_mobility =
        column_labels(df, columns::REDUCED_MOBILITY_CATEGORY)?.map(Tally::from_labels);
    Ok(MobilitySummary {
        reduced_mobility,
        activities,
    })
}

/// Console text for the mobility section.
pub fn report_lines(summary: &MobilitySummary) -> Vec<String> {
    let mut lines = vec![String::new(), "===== ANÁLISE DE MOBILIDADE =====".to_string()];

    let total = summary.activities.total_rows;
    if total == 0 {
        warn!("Survey table is empty, percentages are undefined");
    }

    if let Some(tally) = &summary.reduced_mobility {
        lines.push(String::new());
        lines.push("Pessoas com Mobilidade Reduzida:".to_string());
        for (label, count) in tally.sorted_desc() {
            lines.push(format!("{}: {}", label, format_share(count, total)));
        }
    }

    let activities = &summary.activities;
    lines.push(String::new());
    lines.push(format!(
        "Pessoas que trabalham: {}",
        format_share(activities.works, total)
    ));
    lines.push(format!(
        "Pessoas que estudam: {}",
        format_share(activities.studies, total)
    ));
    lines.push(format!(
        "Pessoas que trabalham e estudam: {}",
        format_share(activities.works_and_studies, total)
    ));
    lines
}

pub fn print(summary: &MobilitySummary) {
    print_lines(&report_lines(summary));
}

/// Write the reduced mobility and activity bar charts.
pub fn render(summary: &MobilitySummary, config: &AnalysisConfig) -> Vec<PathBuf> {
    let mut written = Vec::new();

    if let Some(tally) = &summary.reduced_mobility {
        let path = config.chart_path(REDUCED_MOBILITY_CHART);
        let result = StaticChartRenderer::render_bar_chart(
            &path,
            "Pessoas com Mobilidade Reduzida",
            &tally.sorted_desc(),
            config.chart_size,
            false,
        );
        written.extend(saved_chart(path, result));
    }

    let path = config.chart_path(ACTIVITY_CHART);
    let result = StaticChartRenderer::render_bar_chart(
        &path,
        "Distribuição das Atividades",
        &summary.activities.chart_entries(),
        config.chart_size,
        false,
    );
    written.extend(saved_chart(path, result));

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::percentage;

    /// 100 rows: 40 work, 30 study, 10 of them do both.
    fn hundred_rows() -> DataFrame {
        let works: Vec<i64> = (0..100).map(|i| i64::from(i < 40)).collect();
        let studies: Vec<i64> = (0..100).map(|i| i64::from((30..60).contains(&i))).collect();
        df!("trabalha" => works, "pesquisado_estuda" => studies).unwrap()
    }

    #[test]
    fn counts_work_study_overlap() {
        let totals = ActivityTotals::compute(&hundred_rows()).unwrap();
        assert_eq!(totals.total_rows, 100);
        assert_eq!(totals.works, 40);
        assert_eq!(totals.studies, 30);
        assert_eq!(totals.works_and_studies, 10);
    }

    #[test]
    fn activity_lines_show_share_of_all_rows() {
        let df = hundred_rows();
        let totals = ActivityTotals::compute(&df).unwrap();
        let lines = report_lines(&summarize(&df, totals).unwrap());
        assert_eq!(
            lines,
            vec![
                "",
                "===== ANÁLISE DE MOBILIDADE =====",
                "",
                "Pessoas que trabalham: 40 (40.00%)",
                "Pessoas que estudam: 30 (30.00%)",
                "Pessoas que trabalham e estudam: 10 (10.00%)",
            ]
        );
    }

    #[test]
    fn empty_table_prints_undefined_shares() {
        let df = df!("trabalha" => Vec::<i64>::new()).unwrap();
        let totals = ActivityTotals::compute(&df).unwrap();
        let lines = report_lines(&summarize(&df, totals).unwrap());
        assert_eq!(lines[3], "Pessoas que trabalham: 0 (percentual indefinido)");
        assert_eq!(
            lines[5],
            "Pessoas que trabalham e estudam: 0 (percentual indefinido)"
        );
    }

    #[test]
    fn missing_flags_count_as_zero() {
        let df = df!("sexo" => [1i64, 2]).unwrap();
        let totals = ActivityTotals::compute(&df).unwrap();
        assert_eq!(totals.total_rows, 2);
        assert_eq!(totals.works, 0);
        assert_eq!(totals.works_and_studies, 0);
    }

    #[test]
    fn empty_table_has_no_percentages() {
        let df = df!("trabalha" => Vec::<i64>::new()).unwrap();
        let totals = ActivityTotals::compute(&df).unwrap();
        assert_eq!(totals, ActivityTotals::default());
        assert_eq!(percentage(totals.works, totals.total_rows), None);
    }

    #[test]
    fn reduced_mobility_tally_from_category_column() {
        let df = df!("mobilidade_reduzida" => [Some(1i64), Some(2), Some(2), None]).unwrap();
        let recoded = crate::data::Recoder::recode(&df).unwrap();
        let totals = ActivityTotals::compute(&recoded).unwrap();
        let summary = summarize(&recoded, totals).unwrap();
        let tally = summary.reduced_mobility.as_ref().unwrap();
        assert_eq!(tally.get("Sim"), 1);
        assert_eq!(tally.get("Não"), 2);
        assert_eq!(tally.total(), 3);

        let lines = report_lines(&summary);
        assert_eq!(lines[3], "Pessoas com Mobilidade Reduzida:");
        assert_eq!(lines[4], "Não: 2 (50.00%)");
        assert_eq!(lines[5], "Sim: 1 (25.00%)");
    }
}
