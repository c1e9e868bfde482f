use std::collections::TryReserveError;

use thiserror::Error;

/// Decision-table configuration rejected at compile time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("table has {rows} predicate rows; at most 32 fit in a bitfield")]
    TooManyPredicates { rows: usize },

    #[error("column {column} has {got} conditions; expected {expected}, one per predicate row")]
    ColumnShape {
        column: usize,
        expected: usize,
        got: usize,
    },

    #[error("no rule columns defined; at least one column is required")]
    NoColumns,

    #[error("binding references undefined column {column}; table has {columns} columns")]
    UndefinedColumn { column: usize, columns: usize },

    #[error("column {column} is bound to more than one action")]
    DuplicateBinding { column: usize },

    #[error("column {column} is not bound to any action")]
    UnboundColumn { column: usize },
}

/// Storage growth for an id table could not be satisfied.
///
/// Fatal for the in-flight batch; partially filled outputs must be
/// discarded, there is no partial-result recovery.
#[derive(Debug, Error)]
#[error("id table allocation failed: {0}")]
pub struct AllocationError(#[from] TryReserveError);

/// A classification pass rejected its inputs or failed mid-batch.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("ids and bitfields differ in length ({ids} vs {bitfields})")]
    LengthMismatch { ids: usize, bitfields: usize },

    #[error("outputs hold {got} action tables but the table routes to {expected}")]
    OutputShape { expected: usize, got: usize },

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_predicates_message() {
        let err = ConfigError::TooManyPredicates { rows: 40 };
        assert_eq!(
            err.to_string(),
            "table has 40 predicate rows; at most 32 fit in a bitfield"
        );
    }

    #[test]
    fn column_shape_message() {
        let err = ConfigError::ColumnShape {
            column: 2,
            expected: 5,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "column 2 has 3 conditions; expected 5, one per predicate row"
        );
    }

    #[test]
    fn no_columns_message() {
        assert_eq!(
            ConfigError::NoColumns.to_string(),
            "no rule columns defined; at least one column is required"
        );
    }

    #[test]
    fn undefined_column_message() {
        let err = ConfigError::UndefinedColumn {
            column: 7,
            columns: 5,
        };
        assert_eq!(
            err.to_string(),
            "binding references undefined column 7; table has 5 columns"
        );
    }

    #[test]
    fn duplicate_binding_message() {
        let err = ConfigError::DuplicateBinding { column: 1 };
        assert_eq!(err.to_string(), "column 1 is bound to more than one action");
    }

    #[test]
    fn unbound_column_message() {
        let err = ConfigError::UnboundColumn { column: 3 };
        assert_eq!(err.to_string(), "column 3 is not bound to any action");
    }

    #[test]
    fn length_mismatch_message() {
        let err = ClassifyError::LengthMismatch {
            ids: 10,
            bitfields: 9,
        };
        assert_eq!(
            err.to_string(),
            "ids and bitfields differ in length (10 vs 9)"
        );
    }

    #[test]
    fn output_shape_message() {
        let err = ClassifyError::OutputShape {
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "outputs hold 2 action tables but the table routes to 3"
        );
    }
}
