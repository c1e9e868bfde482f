use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Unique applicant identifier.
pub type ApplicantId = u32;

/// Bitset of the ways a piece of applicant data was verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifyMethods(u32);

impl VerifyMethods {
    /// No verification performed.
    pub const NONE: Self = Self(0);
    /// Verified against a state-issued ID.
    pub const STATE_ID: Self = Self(1 << 0);
    /// Verified against a passport.
    pub const PASSPORT: Self = Self(1 << 1);
    /// Verified against a utility bill.
    pub const UTILITY: Self = Self(1 << 2);

    /// Whether every flag in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flags are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// A copy of `self` with the flags in `other` cleared.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for VerifyMethods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VerifyMethods {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for VerifyMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (flag, name) in [
            (Self::STATE_ID, "state-id"),
            (Self::PASSPORT, "passport"),
            (Self::UTILITY, "utility"),
        ] {
            if self.contains(flag) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A loan application record.
///
/// Absent address/identity data and empty verification flags are valid
/// states, not errors; they encode to predicate-false bits. Records are
/// immutable once created and never mutated by the classifier.
#[derive(Debug, Clone)]
pub struct Applicant {
    pub id: ApplicantId,
    pub address: Option<String>,
    pub identity: Option<String>,
    pub owns_other_home: bool,
    pub annual_salary: u32,
    pub loan_amount: u32,
    pub verify_address: VerifyMethods,
    pub verify_identity: VerifyMethods,
}

/// Monotonic id source owned by whoever creates applicants.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: ApplicantId,
}

impl IdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id in sequence.
    pub fn next_id(&mut self) -> ApplicantId {
        let id = self.next;
        self.next += 1;
        id
    }
}
