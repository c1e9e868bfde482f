use super::error::ClassifyError;
use super::table::IdTable;

/// Caller-owned output buckets, one [`IdTable`] per action of a compiled
/// decision table.
///
/// Created via [`DecisionTable::outputs()`](super::decision_table::DecisionTable::outputs),
/// which pre-sizes every bucket for the worst-case routing of the pass so
/// the classifier's speculative stores never land out of bounds. Action
/// names are resolved to flat indices at construction; the hot loop works in
/// index arithmetic only.
#[derive(Debug, Clone)]
pub struct ActionOutputs {
    actions: Vec<String>,
    tables: Vec<IdTable>,
}

impl ActionOutputs {
    pub(crate) fn new(actions: Vec<String>, tables: Vec<IdTable>) -> Self {
        debug_assert_eq!(actions.len(), tables.len());
        Self { actions, tables }
    }

    /// Number of action buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The bucket for a named action, if the table routes to it.
    #[must_use]
    pub fn get(&self, action: &str) -> Option<&IdTable> {
        self.index_of(action).map(|idx| &self.tables[idx])
    }

    /// The flat index of a named action.
    #[must_use]
    pub fn index_of(&self, action: &str) -> Option<usize> {
        self.actions.iter().position(|a| a == action)
    }

    /// Iterate over `(action, bucket)` pairs in binding-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IdTable)> {
        self.actions
            .iter()
            .map(String::as_str)
            .zip(self.tables.iter())
    }

    /// Reset every bucket's count to 0, retaining storage for the next pass.
    pub fn clear(&mut self) {
        for table in &mut self.tables {
            table.clear();
        }
    }

    /// Concatenate another shard's buckets onto this one, action by action.
    ///
    /// Both sides must come from the same compiled table.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::OutputShape`] if the action sets differ, or
    /// an allocation error if growth fails.
    pub fn merge(&mut self, other: &ActionOutputs) -> Result<(), ClassifyError> {
        if self.actions != other.actions {
            return Err(ClassifyError::OutputShape {
                expected: self.tables.len(),
                got: other.tables.len(),
            });
        }
        for (dst, src) in self.tables.iter_mut().zip(&other.tables) {
            dst.extend_from_slice(src.as_slice())?;
        }
        Ok(())
    }

    pub(crate) fn tables_mut(&mut self) -> &mut [IdTable] {
        &mut self.tables
    }

    pub(crate) fn counts(&self) -> Vec<usize> {
        self.tables.iter().map(IdTable::len).collect()
    }

    pub(crate) fn actions(&self) -> &[String] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(actions: &[&str]) -> ActionOutputs {
        ActionOutputs::new(
            actions.iter().map(|&a| a.to_owned()).collect(),
            actions.iter().map(|_| IdTable::new()).collect(),
        )
    }

    #[test]
    fn lookup_by_name() {
        let out = outputs(&["reject", "immediate", "manual"]);
        assert_eq!(out.index_of("reject"), Some(0));
        assert_eq!(out.index_of("manual"), Some(2));
        assert_eq!(out.index_of("unknown"), None);
        assert!(out.get("immediate").is_some());
        assert!(out.get("unknown").is_none());
    }

    #[test]
    fn clear_resets_all_buckets() {
        let mut out = outputs(&["a", "b"]);
        out.tables_mut()[0].push(1).unwrap();
        out.tables_mut()[1].push(2).unwrap();
        out.clear();
        assert!(out.get("a").unwrap().is_empty());
        assert!(out.get("b").unwrap().is_empty());
    }

    #[test]
    fn merge_concatenates_per_action() {
        let mut left = outputs(&["a", "b"]);
        left.tables_mut()[0].push(1).unwrap();
        let mut right = outputs(&["a", "b"]);
        right.tables_mut()[0].push(2).unwrap();
        right.tables_mut()[1].push(3).unwrap();

        left.merge(&right).unwrap();
        assert_eq!(left.get("a").unwrap().as_slice(), &[1, 2]);
        assert_eq!(left.get("b").unwrap().as_slice(), &[3]);
    }

    #[test]
    fn merge_rejects_mismatched_actions() {
        let mut left = outputs(&["a", "b"]);
        let right = outputs(&["a", "c"]);
        assert!(matches!(
            left.merge(&right),
            Err(ClassifyError::OutputShape { .. })
        ));
    }

    #[test]
    fn iter_preserves_registration_order() {
        let out = outputs(&["reject", "immediate"]);
        let names: Vec<&str> = out.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["reject", "immediate"]);
    }
}
