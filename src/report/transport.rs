//! Transport Mode Reporter
//! Commute and study transport mode frequencies.

use crate::charts::StaticChartRenderer;
use crate::config::AnalysisConfig;
use crate::data::codes::{SINGLE_MODE_CODES, TRANSPORT_MODE};
use crate::data::columns;
use crate::data::value::column_values;
use crate::data::SurveyValue;
use crate::report::{print_lines, saved_chart, ActivityTotals};
use crate::stats::{format_share, Tally};
use log::warn;
use polars::prelude::*;
use std::path::PathBuf;

/// Why a trip is made; selects the column, denominator and chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripPurpose {
    Work,
    Study,
}

impl TripPurpose {
    pub fn source_column(self) -> &'static str {
        match self {
            TripPurpose::Work => columns::COMMUTE_MODE,
            TripPurpose::Study => columns::STUDY_MODE,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TripPurpose::Work => "Meios de Transporte para o Trabalho",
            TripPurpose::Study => "Meios de Transporte para Estudo",
        }
    }

    pub fn chart_file(self) -> &'static str {
        match self {
            TripPurpose::Work => "transportes_trabalho.png",
            TripPurpose::Study => "transportes_estudo.png",
        }
    }

    /// People making this kind of trip.
    pub fn subgroup_total(self, activities: &ActivityTotals) -> usize {
        match self {
            TripPurpose::Work => activities.works,
            TripPurpose::Study => activities.studies,
        }
    }

    fn subgroup_name(self) -> &'static str {
        match self {
            TripPurpose::Work => "trabalha",
            TripPurpose::Study => "estuda",
        }
    }
}

/// Single-mode counts for one trip purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTally {
    pub purpose: TripPurpose,
    pub modes: Tally,
    /// Percentage denominator: everyone who works (or studies).
    pub subgroup_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSummary {
    pub commute: Option<ModeTally>,
    pub study: Option<ModeTally>,
}

/// Count each single-mode code (1 to 12) present in the column.
///
/// Combined answers and codes outside the range are left out, so the sum
/// never exceeds the number of non-missing answers.
pub fn count_modes(values: &[SurveyValue]) -> Tally {
    let mut modes = Tally::new();
    for code in values.iter().filter_map(SurveyValue::code) {
        if !SINGLE_MODE_CODES.contains(&code) {
            continue;
        }
        if let Some(label) = TRANSPORT_MODE.label(code) {
            modes.add(label, 1);
        }
    }
    modes
}

fn tally_purpose(
    df: &DataFrame,
    purpose: TripPurpose,
    activities: &ActivityTotals,
) -> PolarsResult<Option<ModeTally>> {
    let Some(values) = column_values(df, purpose.source_column())? else {
        warn!(
            "Column `{}` absent, skipping {}",
            purpose.source_column(),
            purpose.title()
        );
        return Ok(None);
    };

    Ok(Some(ModeTally {
        purpose,
        modes: count_modes(&values),
        subgroup_total: purpose.subgroup_total(activities),
    }))
}

pub fn summarize(df: &DataFrame, activities: &ActivityTotals) -> PolarsResult<TransportSummary> {
    Ok(TransportSummary {
        commute: tally_purpose(df, TripPurpose::Work, activities)?,
        study: tally_purpose(df, TripPurpose::Study, activities)?,
    })
}

fn push_modes(lines: &mut Vec<String>, tally: &ModeTally) {
    lines.push(String::new());
    lines.push(format!("{}:", tally.purpose.title()));

    if tally.subgroup_total == 0 {
        warn!(
            "Nobody {} in the survey, mode percentages skipped",
            tally.purpose.subgroup_name()
        );
        lines.push(format!(
            "Nenhum respondente que {}; percentuais não calculados.",
            tally.purpose.subgroup_name()
        ));
        return;
    }

    for (mode, count) in tally.modes.sorted_desc() {
        lines.push(format!(
            "{}: {}",
            mode,
            format_share(count, tally.subgroup_total)
        ));
    }
}

/// Console text for the transport section; shares are of the subgroup.
pub fn report_lines(summary: &TransportSummary) -> Vec<String> {
    let mut lines = vec![String::new(), "===== ANÁLISE DE TRANSPORTES =====".to_string()];
    for tally in [&summary.commute, &summary.study].into_iter().flatten() {
        push_modes(&mut lines, tally);
    }
    lines
}

pub fn print(summary: &TransportSummary) {
    print_lines(&report_lines(summary));
}

/// Write one bar chart per trip purpose, bars by descending count.
pub fn render(summary: &TransportSummary, config: &AnalysisConfig) -> Vec<PathBuf> {
    let mut written = Vec::new();

    for tally in [&summary.commute, &summary.study].into_iter().flatten() {
        let path = config.chart_path(tally.purpose.chart_file());
        let result = StaticChartRenderer::render_bar_chart(
            &path,
            tally.purpose.title(),
            &tally.modes.sorted_desc(),
            config.wide_chart_size,
            true,
        );
        written.extend(saved_chart(path, result));
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> DataFrame {
        df!(
            "trabalha" => [1i64, 1, 1, 1, 0, 0],
            "pesquisado_estuda" => [0i64, 0, 0, 1, 1, 0],
            "meio_transporte_trab" => [Some("3"), Some("3"), Some("11"), Some("3,4"), None, Some("13")],
            "transporte_aula" => [None, None, None, Some(1i64), Some(1), None],
        )
        .unwrap()
    }

    #[test]
    fn commute_modes_skip_combined_codes() {
        let df = survey();
        let totals = ActivityTotals::compute(&df).unwrap();
        let summary = summarize(&df, &totals).unwrap();
        let commute = summary.commute.unwrap();

        assert_eq!(commute.subgroup_total, 4);
        assert_eq!(commute.modes.get("Ônibus"), 2);
        assert_eq!(commute.modes.get("Táxi"), 1);
        assert_eq!(commute.modes.total(), 3);

    }

    #[test]
    fn mode_lines_are_shares_of_each_subgroup() {
        let df = survey();
        let totals = ActivityTotals::compute(&df).unwrap();
        let lines = report_lines(&summarize(&df, &totals).unwrap());
        assert_eq!(
            lines,
            vec![
                "",
                "===== ANÁLISE DE TRANSPORTES =====",
                "",
                "Meios de Transporte para o Trabalho:",
                "Ônibus: 2 (50.00%)",
                "Táxi: 1 (25.00%)",
                "",
                "Meios de Transporte para Estudo:",
                "A pé: 2 (100.00%)",
            ]
        );
    }

    #[test]
    fn taxi_share_of_workers() {
        let df = df!(
            "trabalha" => [1i64, 1, 1],
            "meio_transporte_trab" => [11i64, 11, 3],
        )
        .unwrap();
        let totals = ActivityTotals::compute(&df).unwrap();
        let lines = report_lines(&summarize(&df, &totals).unwrap());
        assert!(lines.contains(&"Táxi: 2 (66.67%)".to_string()));
        assert!(lines.contains(&"Ônibus: 1 (33.33%)".to_string()));
    }

    #[test]
    fn mode_counts_never_exceed_answers() {
        let df = survey();
        let values = column_values(&df, columns::COMMUTE_MODE).unwrap().unwrap();
        let answered = values.iter().filter(|v| !v.is_missing()).count();
        assert!(count_modes(&values).total() <= answered);
    }

    #[test]
    fn study_percentages_use_students_as_denominator() {
        let df = survey();
        let totals = ActivityTotals::compute(&df).unwrap();
        let summary = summarize(&df, &totals).unwrap();
        let study = summary.study.unwrap();
        assert_eq!(study.subgroup_total, 2);
        assert_eq!(study.modes.sorted_desc(), vec![("A pé".to_string(), 2)]);
    }

    #[test]
    fn empty_subgroup_skips_percentages() {
        let df = df!("meio_transporte_trab" => [3i64, 3]).unwrap();
        let totals = ActivityTotals::compute(&df).unwrap();
        let summary = summarize(&df, &totals).unwrap();
        let commute = summary.commute.as_ref().unwrap();
        assert_eq!(commute.modes.get("Ônibus"), 2);
        assert!(summary.study.is_none());

        let lines = report_lines(&summary);
        assert_eq!(
            lines[2..],
            [
                "",
                "Meios de Transporte para o Trabalho:",
                "Nenhum respondente que trabalha; percentuais não calculados.",
            ]
        );
    }
}
