//! OD Recife - Origin-Destination Survey Analysis
//!
//! Loads the Recife 2016 OD survey, prints descriptive tables and writes
//! summary charts to the working directory.

mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use od_recife::config::AnalysisConfig;
use od_recife::pipeline::{analyze_survey, PipelineOutcome};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = AnalysisConfig::new(args.file);

    match analyze_survey(&config)? {
        PipelineOutcome::Completed { rows, charts } => {
            log::debug!("{} rows analysed, charts: {:?}", rows, charts);
        }
        PipelineOutcome::LoadFailed => {}
    }

    Ok(())
}
