//! Survey column names.
//!
//! Source columns come straight from the OD Recife 2016 header row; derived
//! columns are appended by the [`Recoder`](super::Recoder).

// Source columns
pub const SEX: &str = "sexo";
pub const AGE_BRACKET: &str = "faixa_etaria";
pub const INCOME_BRACKET: &str = "renda";
pub const REDUCED_MOBILITY: &str = "mobilidade_reduzida";
pub const COMMUTE_MODE: &str = "meio_transporte_trab";
pub const STUDY_MODE: &str = "transporte_aula";
pub const WORKS: &str = "trabalha";
pub const STUDIES: &str = "pesquisado_estuda";
pub const INTERNET_PHONE: &str = "internet_celular";
pub const TAXI_APP_COMMUTE: &str = "utiliza_app_taxi_trabalho";
pub const TERMINAL_COMMUTE: &str = "utiliza_terminal_int_trabalho";
pub const TAXI_APP_STUDY: &str = "utiliza_app_taxi_aula";

// Derived columns
pub const SEX_CATEGORY: &str = "sex_category";
pub const AGE_BRACKET_CATEGORY: &str = "age_bracket_category";
pub const INCOME_BRACKET_CATEGORY: &str = "income_bracket_category";
pub const REDUCED_MOBILITY_CATEGORY: &str = "reduced_mobility_category";
pub const COMMUTE_MODE_CATEGORY: &str = "commute_mode_category";
pub const STUDY_MODE_CATEGORY: &str = "study_mode_category";
