use std::fmt;

/// One cell of a decision table: the state a single predicate must be in
/// for the enclosing rule column to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The predicate bit must be 0.
    MustBeFalse,
    /// The predicate bit must be 1.
    MustBeTrue,
    /// The predicate bit does not constrain the match.
    DontCare,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::MustBeFalse => write!(f, "F"),
            Condition::MustBeTrue => write!(f, "T"),
            Condition::DontCare => write!(f, "-"),
        }
    }
}
