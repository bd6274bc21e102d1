//! Survey Recoder Module
//! Derives descriptive category columns from numeric survey codes.

use crate::data::codes::{self, CodeMap};
use crate::data::columns;
use crate::data::value::column_values;
use log::{debug, info};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecodeError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One derived column: where it reads from, where it writes to, which map it uses.
#[derive(Debug, Clone, Copy)]
pub struct Recoding {
    pub source: &'static str,
    pub target: &'static str,
    pub map: CodeMap,
}

/// Every derived column produced by the recoder.
pub const RECODINGS: [Recoding; 6] = [
    Recoding {
        source: columns::SEX,
        target: columns::SEX_CATEGORY,
        map: codes::SEX,
    },
    Recoding {
        source: columns::AGE_BRACKET,
        target: columns::AGE_BRACKET_CATEGORY,
        map: codes::AGE_BRACKET,
    },
    Recoding {
        source: columns::INCOME_BRACKET,
        target: columns::INCOME_BRACKET_CATEGORY,
        map: codes::INCOME_BRACKET,
    },
    Recoding {
        source: columns::REDUCED_MOBILITY,
        target: columns::REDUCED_MOBILITY_CATEGORY,
        map: codes::REDUCED_MOBILITY,
    },
    Recoding {
        source: columns::COMMUTE_MODE,
        target: columns::COMMUTE_MODE_CATEGORY,
        map: codes::TRANSPORT_MODE,
    },
    Recoding {
        source: columns::STUDY_MODE,
        target: columns::STUDY_MODE_CATEGORY,
        map: codes::TRANSPORT_MODE,
    },
];

/// Handles survey code recoding.
pub struct Recoder;

impl Recoder {
    /// Recode a single column into labels.
    pub fn recode_column(
        df: &DataFrame,
        recoding: &Recoding,
    ) -> Result<Option<Column>, RecodeError> {
        let Some(values) = column_values(df, recoding.source)? else {
            return Ok(None);
        };

        let labels: Vec<Option<String>> =
            values.iter().map(|v| recoding.map.recode(v)).collect();

        Ok(Some(Column::new(recoding.target.into(), labels)))
    }

    /// Produce a copy of the table with every derivable category column added.
    ///
    /// Source columns are never modified and derived columns are only read
    /// from their sources, so recoding an already recoded table is a no-op.
    pub fn recode(df: &DataFrame) -> Result<DataFrame, RecodeError> {
        let mut recoded = df.clone();
        let mut derived = 0usize;

        for recoding in &RECODINGS {
            match Self::recode_column(df, recoding)? {
                Some(column) => {
                    recoded.with_column(column)?;
                    derived += 1;
                }
                None => debug!(
                    "Column `{}` absent, skipping `{}`",
                    recoding.source, recoding.target
                ),
            }
        }

        info!("Derived {} category columns", derived);
        Ok(recoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::column_labels;

    fn sample() -> DataFrame {
        df!(
            "sexo" => [Some(1i64), Some(2), None],
            "faixa_etaria" => [Some(3i64), Some(8), None],
            "meio_transporte_trab" => [Some("11"), Some("3,4"), None],
        )
        .unwrap()
    }

    #[test]
    fn adds_category_columns_and_keeps_sources() {
        let df = sample();
        let recoded = Recoder::recode(&df).unwrap();

        assert_eq!(recoded.height(), 3);
        assert_eq!(
            column_values(&recoded, "sexo").unwrap(),
            column_values(&df, "sexo").unwrap()
        );

        let sex = column_labels(&recoded, columns::SEX_CATEGORY).unwrap().unwrap();
        assert_eq!(
            sex,
            vec![Some("Masculino".to_string()), Some("Feminino".to_string()), None]
        );

        let age = column_labels(&recoded, columns::AGE_BRACKET_CATEGORY)
            .unwrap()
            .unwrap();
        assert_eq!(age, vec![Some("16 a 24 anos".to_string()), Some("8".to_string()), None]);

        let commute = column_labels(&recoded, columns::COMMUTE_MODE_CATEGORY)
            .unwrap()
            .unwrap();
        assert_eq!(commute, vec![Some("Táxi".to_string()), Some("3,4".to_string()), None]);
    }

    #[test]
    fn skips_absent_sources() {
        let recoded = Recoder::recode(&sample()).unwrap();
        assert!(recoded.column(columns::INCOME_BRACKET_CATEGORY).is_err());
        assert!(recoded.column(columns::STUDY_MODE_CATEGORY).is_err());
    }

    #[test]
    fn recoding_twice_is_idempotent() {
        let once = Recoder::recode(&sample()).unwrap();
        let twice = Recoder::recode(&once).unwrap();
        assert_eq!(once.width(), twice.width());
        for recoding in &RECODINGS {
            assert_eq!(
                column_labels(&once, recoding.target).unwrap(),
                column_labels(&twice, recoding.target).unwrap()
            );
        }
    }
}
