use std::fmt;
use std::time::Instant;

use super::applicant::ApplicantId;
use super::condition::Condition;
use super::error::{AllocationError, ClassifyError, ConfigError};
use super::mask::RuleMask;
use super::outputs::ActionOutputs;
use super::report::ClassifyReport;
use super::table::IdTable;

/// Builder for a [`DecisionTable`].
///
/// Columns are declared in order; bindings attach each column to a named
/// action afterwards, and several columns may share one action. Everything
/// is validated in [`compile()`](Self::compile).
///
/// # Example
///
/// ```
/// use triage::{Condition::{DontCare, MustBeFalse, MustBeTrue}, DecisionTableBuilder};
///
/// let table = DecisionTableBuilder::new(2)
///     .column(&[MustBeFalse, DontCare])
///     .column(&[MustBeTrue, MustBeTrue])
///     .bind(0, "reject")
///     .bind(1, "accept")
///     .compile()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    rows: usize,
    columns: Vec<Vec<Condition>>,
    bindings: Vec<(usize, String)>,
}

impl DecisionTableBuilder {
    /// Start a table over `rows` predicate rows.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Append a rule column. `conditions` must hold one entry per predicate
    /// row; the shape is checked at compile time.
    #[must_use]
    pub fn column(mut self, conditions: &[Condition]) -> Self {
        self.columns.push(conditions.to_vec());
        self
    }

    /// Bind a column (by declaration index) to a named action.
    #[must_use]
    pub fn bind(mut self, column: usize, action: &str) -> Self {
        self.bindings.push((column, action.to_owned()));
        self
    }

    /// Compile the table into an immutable [`DecisionTable`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation fails.
    pub fn compile(self) -> Result<DecisionTable, ConfigError> {
        crate::compile::compile(self.rows, self.columns, self.bindings)
    }
}

/// A compiled, immutable decision table. Thread-safe and designed to live
/// behind `Arc`; one compilation serves any number of classification passes.
#[derive(Debug)]
pub struct DecisionTable {
    pub(crate) rows: usize,
    pub(crate) masks: Vec<RuleMask>,
    /// Per column: index of the bound action.
    pub(crate) bindings: Vec<usize>,
    /// Distinct action names in first-binding order.
    pub(crate) actions: Vec<String>,
    /// Per action: how many columns route to it.
    pub(crate) fan_in: Vec<usize>,
}

impl DecisionTable {
    /// Number of predicate rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of rule columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.masks.len()
    }

    /// The compiled per-column masks, in column declaration order.
    #[must_use]
    pub fn masks(&self) -> &[RuleMask] {
        &self.masks
    }

    /// Action names in first-binding order.
    #[must_use]
    pub fn actions(&self) -> Vec<&str> {
        self.actions.iter().map(String::as_str).collect()
    }

    /// The action a column routes to.
    #[must_use]
    pub fn action_of(&self, column: usize) -> Option<&str> {
        self.bindings
            .get(column)
            .map(|&idx| self.actions[idx].as_str())
    }

    /// Create output buckets for a pass over `record_count` records.
    ///
    /// Every bucket is pre-sized to its worst case, `record_count` times the
    /// number of columns bound to the action, so the classifier's
    /// speculative stores never need to grow mid-pass.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if a bucket's storage cannot be obtained.
    pub fn outputs(&self, record_count: usize) -> Result<ActionOutputs, AllocationError> {
        let tables: Vec<IdTable> = self
            .fan_in
            .iter()
            .map(|&columns| IdTable::with_capacity(record_count.saturating_mul(columns)))
            .collect::<Result<_, _>>()?;
        Ok(ActionOutputs::new(self.actions.clone(), tables))
    }

    /// Route every record to the bucket of every column it satisfies.
    ///
    /// `ids[i]` and `bitfields[i]` describe the same record. A record may
    /// satisfy zero, one, or several columns; when several of them share an
    /// action, the id lands in that bucket once per satisfied column.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError`] if the inputs disagree in length, the
    /// outputs were built for a different table, or growth fails mid-batch.
    pub fn classify(
        &self,
        ids: &[ApplicantId],
        bitfields: &[u32],
        outputs: &mut ActionOutputs,
    ) -> Result<(), ClassifyError> {
        if ids.len() != bitfields.len() {
            return Err(ClassifyError::LengthMismatch {
                ids: ids.len(),
                bitfields: bitfields.len(),
            });
        }
        if outputs.actions() != self.actions.as_slice() {
            return Err(ClassifyError::OutputShape {
                expected: self.actions.len(),
                got: outputs.len(),
            });
        }
        crate::classify::classify(
            &self.masks,
            &self.bindings,
            ids,
            bitfields,
            outputs.tables_mut(),
        )
    }

    /// [`classify()`](Self::classify) plus per-action routed counts and the
    /// wall-clock duration of the pass.
    ///
    /// # Errors
    ///
    /// Same conditions as [`classify()`](Self::classify).
    pub fn classify_detailed(
        &self,
        ids: &[ApplicantId],
        bitfields: &[u32],
        outputs: &mut ActionOutputs,
    ) -> Result<ClassifyReport, ClassifyError> {
        let before = outputs.counts();
        let start = Instant::now();
        self.classify(ids, bitfields, outputs)?;
        let duration = start.elapsed();

        let routed = self
            .actions
            .iter()
            .zip(outputs.counts())
            .zip(before)
            .map(|((action, after), before)| (action.clone(), after - before))
            .collect();
        Ok(ClassifyReport::new(ids.len(), routed, duration))
    }
}

impl fmt::Display for DecisionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecisionTable({} predicates, {} columns, {} actions)",
            self.rows,
            self.masks.len(),
            self.actions.len(),
        )
    }
}
