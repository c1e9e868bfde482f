use std::fmt;
use std::time::Duration;

/// Per-pass summary returned by
/// [`DecisionTable::classify_detailed()`](super::decision_table::DecisionTable::classify_detailed).
///
/// Holds the number of records seen, how many ids each action received
/// during the pass, and the wall-clock duration.
#[derive(Debug, Clone)]
#[must_use]
pub struct ClassifyReport {
    records: usize,
    routed: Vec<(String, usize)>,
    duration: Duration,
}

impl ClassifyReport {
    pub(crate) fn new(records: usize, routed: Vec<(String, usize)>, duration: Duration) -> Self {
        Self {
            records,
            routed,
            duration,
        }
    }

    /// Number of input records in the pass.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// `(action, ids routed)` pairs in binding-registration order.
    #[must_use]
    pub fn routed(&self) -> &[(String, usize)] {
        &self.routed
    }

    /// Ids routed to one action during the pass.
    #[must_use]
    pub fn routed_to(&self, action: &str) -> Option<usize> {
        self.routed
            .iter()
            .find(|(name, _)| name == action)
            .map(|&(_, count)| count)
    }

    /// Total ids committed across all actions. Can exceed `records()` when
    /// records satisfy several columns.
    #[must_use]
    pub fn total_routed(&self) -> usize {
        self.routed.iter().map(|&(_, count)| count).sum()
    }

    /// Wall-clock duration of the pass.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for ClassifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "classified {} records in {:?}", self.records, self.duration)?;
        if self.routed.is_empty() {
            return Ok(());
        }
        write!(f, ": ")?;
        for (i, (action, count)) in self.routed.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{action}={count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accessors() {
        let report = ClassifyReport::new(
            100,
            vec![("reject".into(), 40), ("manual".into(), 25)],
            Duration::from_micros(120),
        );
        assert_eq!(report.records(), 100);
        assert_eq!(report.routed_to("reject"), Some(40));
        assert_eq!(report.routed_to("manual"), Some(25));
        assert_eq!(report.routed_to("unknown"), None);
        assert_eq!(report.total_routed(), 65);
        assert_eq!(report.duration(), Duration::from_micros(120));
    }

    #[test]
    fn report_display() {
        let report = ClassifyReport::new(
            3,
            vec![("reject".into(), 2), ("manual".into(), 0)],
            Duration::from_nanos(500),
        );
        let s = report.to_string();
        assert!(s.contains("classified 3 records"));
        assert!(s.contains("reject=2"));
        assert!(s.contains("manual=0"));
    }
}
