//! Survey Code Maps
//! Fixed lookup tables from numeric survey codes to Portuguese labels.

use crate::data::SurveyValue;
use std::ops::RangeInclusive;

/// Static mapping from survey code to label, kept in code order.
#[derive(Debug, Clone, Copy)]
pub struct CodeMap {
    entries: &'static [(i64, &'static str)],
}

impl CodeMap {
    pub const fn new(entries: &'static [(i64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Label for a code, if the map knows it.
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| *label)
    }

    /// Labels in natural key order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(_, label)| *label).collect()
    }

    /// Recode one cell.
    ///
    /// Missing stays missing, known codes become labels, anything else
    /// passes through as its own text.
    pub fn recode(&self, value: &SurveyValue) -> Option<String> {
        match value {
            SurveyValue::Missing => None,
            SurveyValue::Code(code) => Some(
                self.label(*code)
                    .map_or_else(|| code.to_string(), str::to_string),
            ),
            SurveyValue::Text(text) => Some(text.clone()),
        }
    }
}

pub const SEX: CodeMap = CodeMap::new(&[(1, "Masculino"), (2, "Feminino")]);

pub const AGE_BRACKET: CodeMap = CodeMap::new(&[
    (1, "Até 6 anos"),
    (2, "6 a 15 anos"),
    (3, "16 a 24 anos"),
    (4, "25 a 39 anos"),
    (5, "40 a 59 anos"),
    (6, "Acima de 60 anos"),
]);

pub const INCOME_BRACKET: CodeMap = CodeMap::new(&[
    (1, "Até 1 SM"),
    (2, "1 a 2 SM"),
    (3, "2 a 3 SM"),
    (4, "3 a 5 SM"),
    (5, "5 a 10 SM"),
    (6, "10 a 20 SM"),
    (7, "Mais de 20 SM"),
    (8, "Sem rendimento"),
    (9, "Sem declaração"),
]);

pub const REDUCED_MOBILITY: CodeMap =
    CodeMap::new(&[(0, "Não declarado"), (1, "Sim"), (2, "Não")]);

pub const TRANSPORT_MODE: CodeMap = CodeMap::new(&[
    (1, "A pé"),
    (2, "Bicicleta"),
    (3, "Ônibus"),
    (4, "Metrô"),
    (5, "Carro (dirigindo)"),
    (6, "Carro (carona familiar)"),
    (7, "Carro (carona amigo)"),
    (8, "Carro (motorista)"),
    (9, "Motocicleta"),
    (10, "Transporte escolar"),
    (11, "Táxi"),
    (12, "Fretado"),
]);

/// Ride-hailing app usage answers.
pub const APP_USAGE: CodeMap = CodeMap::new(&[(1, "Nunca"), (2, "Às vezes"), (3, "Sempre")]);

/// Integration terminal usage answers.
pub const TERMINAL_USAGE: CodeMap =
    CodeMap::new(&[(0, "Não declarado"), (1, "Sim"), (2, "Não")]);

/// Income brackets as shown on the chart and in the printed tally.
pub const INCOME_DISPLAY_ORDER: [&str; 9] = [
    "Até 1 SM",
    "1 a 2 SM",
    "2 a 3 SM",
    "3 a 5 SM",
    "5 a 10 SM",
    "10 a 20 SM",
    "Mais de 20 SM",
    "Sem rendimento",
    "Sem declaração",
];

/// Single-mode transport codes; anything outside is a combined answer.
pub const SINGLE_MODE_CODES: RangeInclusive<i64> = 1..=12;

pub const BUS_MODE: i64 = 3;
pub const TAXI_MODE: i64 = 11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_maps_have_expected_sizes() {
        assert_eq!(SEX.labels().len(), 2);
        assert_eq!(AGE_BRACKET.labels().len(), 6);
        assert_eq!(INCOME_BRACKET.labels().len(), 9);
        assert_eq!(REDUCED_MOBILITY.labels().len(), 3);
        assert_eq!(TRANSPORT_MODE.labels().len(), 12);
        assert!(SINGLE_MODE_CODES.all(|c| TRANSPORT_MODE.label(c).is_some()));
        assert_eq!(TRANSPORT_MODE.label(13), None);
    }

    #[test]
    fn income_display_order_covers_code_map() {
        let mut labels = INCOME_BRACKET.labels();
        let mut order = INCOME_DISPLAY_ORDER.to_vec();
        labels.sort_unstable();
        order.sort_unstable();
        assert_eq!(labels, order);
    }

    #[test]
    fn recode_substitutes_or_passes_through() {
        assert_eq!(SEX.recode(&SurveyValue::Code(1)).as_deref(), Some("Masculino"));
        assert_eq!(SEX.recode(&SurveyValue::Code(7)).as_deref(), Some("7"));
        assert_eq!(
            TRANSPORT_MODE
                .recode(&SurveyValue::Text("3,4".to_string()))
                .as_deref(),
            Some("3,4")
        );
        assert_eq!(AGE_BRACKET.recode(&SurveyValue::Missing), None);
    }
}
