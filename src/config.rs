//! Analysis configuration.

use std::path::{Path, PathBuf};

/// Survey file analysed when none is given on the command line.
pub const DEFAULT_INPUT: &str = "pesquisaodrecife2016.csv";

/// Where to read the survey from and how to write charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Standard chart size in pixels.
    pub chart_size: (u32, u32),
    /// Transport mode charts carry twelve long labels and get a wider canvas.
    pub wide_chart_size: (u32, u32),
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            chart_size: (1200, 800),
            wide_chart_size: (1400, 800),
        }
    }
}

impl AnalysisConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Full path for a chart file name.
    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Whether charts go to the working directory.
    pub fn writes_to_working_dir(&self) -> bool {
        self.output_dir == Path::new(".") || self.output_dir.as_os_str().is_empty()
    }
}
