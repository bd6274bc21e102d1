//! Report module - thematic reporters over the recoded survey table
//!
//! Each reporter splits into a pure `summarize` step, a `report_lines` step
//! producing the Portuguese console text, `print` and, where charts apply, a
//! `render` step.

pub mod demographics;
pub mod mobility;
pub mod technology;
pub mod transport;

pub use mobility::ActivityTotals;

use crate::charts::ChartError;
use log::{info, warn};
use std::path::PathBuf;

/// Write report lines to stdout.
pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Log the outcome of one chart and keep its path when it was written.
pub(crate) fn saved_chart(path: PathBuf, result: Result<(), ChartError>) -> Option<PathBuf> {
    match result {
        Ok(()) => {
            info!("Chart written to {}", path.display());
            Some(path)
        }
        Err(ChartError::Empty) => {
            warn!("Nothing to plot for {}, chart skipped", path.display());
            None
        }
        Err(err) => {
            warn!("Chart {} not written: {}", path.display(), err);
            None
        }
    }
}
