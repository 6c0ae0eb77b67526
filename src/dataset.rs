use crate::{DataSource, MoveColumn, MoveRecord};

use polars::prelude::*;
use std::sync::Arc;

/// The loaded moves, in file order. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MoveRecord>,
    /// Where the records came from (path and the delimiter that worked).
    pub source: Arc<DataSource>,
}

impl Dataset {
    /// Wraps records that did not come from a file.
    pub fn from_records(records: Vec<MoveRecord>) -> Self {
        Dataset {
            records,
            source: Arc::new(DataSource::default()),
        }
    }

    /// Wraps records read from `source`.
    pub fn with_source(records: Vec<MoveRecord>, source: DataSource) -> Self {
        Dataset {
            records,
            source: Arc::new(source),
        }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builds a `DataFrame` with the CSV headers from `records`, in iteration order.
///
/// Power is written as an integer column; every other column as text.
pub fn records_to_frame<'a>(
    records: impl IntoIterator<Item = &'a MoveRecord>,
) -> PolarsResult<DataFrame> {
    let records: Vec<&MoveRecord> = records.into_iter().collect();

    let text = |column: MoveColumn| -> Vec<String> {
        records
            .iter()
            .map(|record| record.cell(column).into_owned())
            .collect()
    };
    let power: Vec<i64> = records.iter().map(|record| record.power).collect();

    df!(
        MoveColumn::Name.header() => text(MoveColumn::Name),
        MoveColumn::Type.header() => text(MoveColumn::Type),
        MoveColumn::Category.header() => text(MoveColumn::Category),
        MoveColumn::Power.header() => power,
        MoveColumn::Accuracy.header() => text(MoveColumn::Accuracy),
        MoveColumn::Pp.header() => text(MoveColumn::Pp),
        MoveColumn::Effect.header() => text(MoveColumn::Effect),
        MoveColumn::Probability.header() => text(MoveColumn::Probability),
    )
}
