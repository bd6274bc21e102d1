use clap::Parser;

/// Analysis of the Recife 2016 origin-destination household survey.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) Semicolon-separated survey export to analyse.
    #[clap(value_parser, default_value = "pesquisaodrecife2016.csv")]
    pub file: String,
}
