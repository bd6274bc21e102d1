//! Survey analysis pipeline.
//!
//! Load, recode, then run the demographics, mobility, transport and
//! technology reporters over the recoded table, in that order.

use crate::config::AnalysisConfig;
use crate::data::{RecodeError, Recoder, SurveyLoader};
use crate::report::{demographics, mobility, print_lines, technology, transport, ActivityTotals};
use log::{error, info};
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Recoding failed: {0}")]
    Recode(#[from] RecodeError),
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The survey could not be read; nothing was analysed.
    LoadFailed,
    Completed {
        rows: usize,
        charts: Vec<PathBuf>,
    },
}

/// Console text for the basic information block.
pub fn basic_info_lines(rows: usize, columns: &[String]) -> Vec<String> {
    vec![
        String::new(),
        "===== INFORMAÇÕES BÁSICAS =====".to_string(),
        format!("Número de registros: {}", rows),
        format!("Colunas disponíveis: {}", columns.join(", ")),
    ]
}

/// Keep a section's summary, or log the failure so the run can go on
/// without that section.
fn section<T>(name: &str, result: PolarsResult<T>) -> Option<T> {
    match result {
        Ok(summary) => Some(summary),
        Err(err) => {
            error!("{} aggregation failed, section skipped: {}", name, err);
            None
        }
    }
}

/// Run every reporter over an already loaded table.
///
/// A reporter whose aggregation fails is skipped; the others still run.
pub fn analyze_table(df: &DataFrame, config: &AnalysisConfig) -> Result<Vec<PathBuf>, PipelineError> {
    let recoded = Recoder::recode(df)?;
    let mut charts = Vec::new();

    if let Some(summary) = section("Demographics", demographics::summarize(&recoded)) {
        demographics::print(&summary);
        charts.extend(demographics::render(&summary, config));
    }

    let activities = section("Activity totals", ActivityTotals::compute(&recoded));
    if let Some(activities) = activities {
        if let Some(summary) = section("Mobility", mobility::summarize(&recoded, activities)) {
            mobility::print(&summary);
            charts.extend(mobility::render(&summary, config));
        }

        if let Some(summary) = section("Transport", transport::summarize(&recoded, &activities)) {
            transport::print(&summary);
            charts.extend(transport::render(&summary, config));
        }
    }

    if let Some(summary) = section("Technology", technology::summarize(&recoded)) {
        technology::print(&summary);
    }

    Ok(charts)
}

/// Load the configured survey file and analyse it.
///
/// A load failure is reported and ends the run with
/// [`PipelineOutcome::LoadFailed`]; it is not an error.
pub fn analyze_survey(config: &AnalysisConfig) -> Result<PipelineOutcome, PipelineError> {
    let mut loader = SurveyLoader::new();

    match loader.load_csv(&config.input_path) {
        Ok(df) => println!(
            "Dados carregados com sucesso! Total de registros: {}",
            df.height()
        ),
        Err(err) => {
            error!("Failed to load {}: {}", config.input_path.display(), err);
            println!("Erro ao carregar o arquivo: {}", err);
            println!("Não foi possível realizar a análise devido a erros na leitura do arquivo.");
            return Ok(PipelineOutcome::LoadFailed);
        }
    }

    let rows = loader.get_row_count();
    print_lines(&basic_info_lines(rows, &loader.get_columns()));

    let Some(df) = loader.into_dataframe() else {
        return Ok(PipelineOutcome::LoadFailed);
    };

    let charts = analyze_table(&df, config)?;
    info!("Analysis finished, {} charts written", charts.len());

    println!("\n===== ANÁLISE CONCLUÍDA =====");
    if config.writes_to_working_dir() {
        println!("Os gráficos foram salvos no diretório atual.");
    } else {
        println!(
            "Os gráficos foram salvos em {}.",
            config.output_dir.display()
        );
    }

    Ok(PipelineOutcome::Completed { rows, charts })
}
