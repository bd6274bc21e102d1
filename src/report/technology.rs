//! Technology Reporter
//! Mobile internet access, ride-hailing apps and integration terminals.
//!
//! Print-only; no charts.

use crate::data::codes::{self, CodeMap, APP_USAGE, TERMINAL_USAGE};
use crate::data::columns;
use crate::data::value::column_values;
use crate::data::SurveyValue;
use crate::report::print_lines;
use crate::stats::{format_share, format_share_of};
use log::debug;
use polars::prelude::*;

/// Internet-enabled phone ownership among people who answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternetAccess {
    pub with_internet: usize,
    pub respondents: usize,
}

/// Answer counts within one transport mode subgroup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgroupResponses {
    /// `(answer code, rows)` in the order the answers are printed.
    pub counts: Vec<(i64, usize)>,
    /// Percentage denominator.
    pub subgroup_total: usize,
}

impl SubgroupResponses {
    pub fn get(&self, answer: i64) -> usize {
        self.counts
            .iter()
            .find(|(code, _)| *code == answer)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.subgroup_total == 0
    }
}

/// Each field is `None` when a required column is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologySummary {
    pub internet_phone: Option<InternetAccess>,
    pub taxi_app_commute: Option<SubgroupResponses>,
    pub terminal_commute: Option<SubgroupResponses>,
    pub taxi_app_study: Option<SubgroupResponses>,
}

/// Ride-hailing answers printed as never, sometimes, always.
const APP_ANSWERS: [i64; 3] = [1, 2, 3];
/// Terminal answers printed as yes, no, undeclared.
const TERMINAL_ANSWERS: [i64; 3] = [1, 2, 0];

const TAXI_RIDERS: &str = "dos usuários de táxi";
const BUS_RIDERS: &str = "dos usuários de ônibus";

fn internet_access(values: &[SurveyValue]) -> InternetAccess {
    let answered = values.iter().filter(|v| !v.is_missing());
    let mut access = InternetAccess {
        with_internet: 0,
        respondents: 0,
    };
    for value in answered {
        access.respondents += 1;
        if value.code() == Some(1) {
            access.with_internet += 1;
        }
    }
    access
}

/// Count `answers` among rows whose mode column equals `mode`.
fn responses_within_mode(
    modes: &[SurveyValue],
    responses: &[SurveyValue],
    mode: i64,
    answers: &[i64],
) -> (Vec<(i64, usize)>, usize) {
    let mut counts: Vec<(i64, usize)> = answers.iter().map(|a| (*a, 0)).collect();
    let mut mode_rows = 0;

    for (m, r) in modes.iter().zip(responses) {
        if m.code() != Some(mode) {
            continue;
        }
        mode_rows += 1;
        if let Some(code) = r.code() {
            if let Some(entry) = counts.iter_mut().find(|(a, _)| *a == code) {
                entry.1 += 1;
            }
        }
    }
    (counts, mode_rows)
}

/// Ride-hailing usage among taxi riders; the subgroup is everyone who gave
/// a never/sometimes/always answer.
pub fn taxi_app_usage(modes: &[SurveyValue], responses: &[SurveyValue]) -> SubgroupResponses {
    let (counts, _) = responses_within_mode(modes, responses, codes::TAXI_MODE, &APP_ANSWERS);
    let subgroup_total = counts.iter().map(|(_, c)| c).sum();
    SubgroupResponses {
        counts,
        subgroup_total,
    }
}

/// Integration terminal usage among bus commuters; the subgroup is every
/// bus commuter whatever they answered.
pub fn terminal_usage(modes: &[SurveyValue], responses: &[SurveyValue]) -> SubgroupResponses {
    let (counts, bus_rows) =
        responses_within_mode(modes, responses, codes::BUS_MODE, &TERMINAL_ANSWERS);
    SubgroupResponses {
        counts,
        subgroup_total: bus_rows,
    }
}

fn load_pair(
    df: &DataFrame,
    mode_column: &str,
    response_column: &str,
) -> PolarsResult<Option<(Vec<SurveyValue>, Vec<SurveyValue>)>> {
    let responses = column_values(df, response_column)?;
    let modes = column_values(df, mode_column)?;
    match (modes, responses) {
        (Some(m), Some(r)) => Ok(Some((m, r))),
        _ => {
            debug!(
                "Columns `{}`/`{}` not both present, skipping",
                mode_column, response_column
            );
            Ok(None)
        }
    }
}

pub fn summarize(df: &DataFrame) -> PolarsResult<TechnologySummary> {
    let internet_phone = column_values(df, columns::INTERNET_PHONE)?
        .map(|values| internet_access(&values));

    let taxi_app_commute = load_pair(df, columns::COMMUTE_MODE, columns::TAXI_APP_COMMUTE)?
        .map(|(m, r)| taxi_app_usage(&m, &r));
    let terminal_commute = load_pair(df, columns::COMMUTE_MODE, columns::TERMINAL_COMMUTE)?
        .map(|(m, r)| terminal_usage(&m, &r));
    let taxi_app_study = load_pair(df, columns::STUDY_MODE, columns::TAXI_APP_STUDY)?
        .map(|(m, r)| taxi_app_usage(&m, &r));

    Ok(TechnologySummary {
        internet_phone,
        taxi_app_commute,
        terminal_commute,
        taxi_app_study,
    })
}

fn push_responses(
    lines: &mut Vec<String>,
    heading: &str,
    responses: &SubgroupResponses,
    labels: &CodeMap,
    riders: &str,
) {
    lines.push(String::new());
    lines.push(format!("{}:", heading));
    for (code, count) in &responses.counts {
        let label = labels.label(*code).unwrap_or_default();
        lines.push(format!(
            "{}: {}",
            label,
            format_share_of(*count, responses.subgroup_total, riders)
        ));
    }
}

/// Console text for the technology section.
///
/// Sub-analyses over an empty subgroup are left out entirely.
pub fn report_lines(summary: &TechnologySummary) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "===== ANÁLISE DE TECNOLOGIA E INTEGRAÇÃO =====".to_string(),
    ];

    if let Some(access) = summary.internet_phone.filter(|a| a.respondents > 0) {
        lines.push(String::new());
        lines.push(format!(
            "Pessoas com celular e acesso à internet: {}",
            format_share(access.with_internet, access.respondents)
        ));
    }

    if let Some(responses) = summary.taxi_app_commute.as_ref().filter(|r| !r.is_empty()) {
        push_responses(
            &mut lines,
            "Uso de aplicativos para táxi (trabalho)",
            responses,
            &APP_USAGE,
            TAXI_RIDERS,
        );
    }

    if let Some(responses) = summary.terminal_commute.as_ref().filter(|r| !r.is_empty()) {
        push_responses(
            &mut lines,
            "Uso de terminais de integração (trabalho)",
            responses,
            &TERMINAL_USAGE,
            BUS_RIDERS,
        );
    }

    if let Some(responses) = summary.taxi_app_study.as_ref().filter(|r| !r.is_empty()) {
        push_responses(
            &mut lines,
            "Uso de aplicativos para táxi (estudo)",
            responses,
            &APP_USAGE,
            TAXI_RIDERS,
        );
    }
    lines
}

pub fn print(summary: &TechnologySummary) {
    print_lines(&report_lines(summary));
}
