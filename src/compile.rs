use crate::{Condition, ConfigError, DecisionTable, RuleMask, BIT_WIDTH};

pub(crate) fn compile(
    rows: usize,
    columns: Vec<Vec<Condition>>,
    bindings: Vec<(usize, String)>,
) -> Result<DecisionTable, ConfigError> {
    check_rows(rows)?;
    check_columns(rows, &columns)?;
    let (column_actions, actions, fan_in) = resolve_bindings(columns.len(), bindings)?;

    let masks: Vec<RuleMask> = columns.iter().map(|col| column_mask(col)).collect();

    Ok(DecisionTable {
        rows,
        masks,
        bindings: column_actions,
        actions,
        fan_in,
    })
}

fn check_rows(rows: usize) -> Result<(), ConfigError> {
    if rows > BIT_WIDTH {
        return Err(ConfigError::TooManyPredicates { rows });
    }
    Ok(())
}

fn check_columns(rows: usize, columns: &[Vec<Condition>]) -> Result<(), ConfigError> {
    if columns.is_empty() {
        return Err(ConfigError::NoColumns);
    }
    for (column, conditions) in columns.iter().enumerate() {
        if conditions.len() != rows {
            return Err(ConfigError::ColumnShape {
                column,
                expected: rows,
                got: conditions.len(),
            });
        }
    }
    Ok(())
}

/// Resolve `(column, action name)` pairs into a per-column action index,
/// the distinct action list in first-binding order, and per-action column
/// counts.
fn resolve_bindings(
    columns: usize,
    bindings: Vec<(usize, String)>,
) -> Result<(Vec<usize>, Vec<String>, Vec<usize>), ConfigError> {
    let mut column_actions: Vec<Option<usize>> = vec![None; columns];
    let mut actions: Vec<String> = Vec::new();

    for (column, action) in bindings {
        if column >= columns {
            return Err(ConfigError::UndefinedColumn { column, columns });
        }
        if column_actions[column].is_some() {
            return Err(ConfigError::DuplicateBinding { column });
        }
        let idx = match actions.iter().position(|a| *a == action) {
            Some(idx) => idx,
            None => {
                actions.push(action);
                actions.len() - 1
            }
        };
        column_actions[column] = Some(idx);
    }

    let column_actions: Vec<usize> = column_actions
        .into_iter()
        .enumerate()
        .map(|(column, action)| action.ok_or(ConfigError::UnboundColumn { column }))
        .collect::<Result<_, _>>()?;

    let mut fan_in = vec![0_usize; actions.len()];
    for &idx in &column_actions {
        fan_in[idx] += 1;
    }

    Ok((column_actions, actions, fan_in))
}

/// Fold one column into its mask pair: `MustBeFalse` rows into `false_bits`,
/// `DontCare` rows into `ignore_bits`, and every bit above the row count
/// into `ignore_bits` so padding never constrains a match.
fn column_mask(conditions: &[Condition]) -> RuleMask {
    let mut false_bits = 0_u32;
    let mut ignore_bits = 0_u32;
    for (row, condition) in conditions.iter().enumerate() {
        match condition {
            Condition::MustBeFalse => false_bits |= 1 << row,
            Condition::DontCare => ignore_bits |= 1 << row,
            Condition::MustBeTrue => {}
        }
    }
    for row in conditions.len()..BIT_WIDTH {
        ignore_bits |= 1 << row;
    }
    RuleMask::new(false_bits, ignore_bits)
}
