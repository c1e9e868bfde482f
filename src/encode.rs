use crate::{Applicant, Predicate, VerifyMethods};

/// Whether the applicant supplied a verified proof of address.
///
/// A utility bill is a weak method: on its own it does not satisfy the
/// predicate, at least one additional method must also be present.
#[must_use]
pub fn has_proof_of_address(address: Option<&str>, methods: VerifyMethods) -> bool {
    if address.is_none() || methods.is_empty() {
        return false;
    }
    if methods.contains(VerifyMethods::UTILITY) {
        !methods.without(VerifyMethods::UTILITY).is_empty()
    } else {
        true
    }
}

/// Whether the applicant supplied a verified proof of identity.
///
/// A utility bill is not a valid form of identity verification, so flags
/// that are exactly the utility bill alone do not satisfy the predicate.
#[must_use]
pub fn has_proof_of_identity(identity: Option<&str>, methods: VerifyMethods) -> bool {
    identity.is_some() && !methods.is_empty() && methods != VerifyMethods::UTILITY
}

/// Whether the requested loan amount is below the annual salary.
#[must_use]
pub fn loan_lt_salary(loan_amount: u32, annual_salary: u32) -> bool {
    loan_amount < annual_salary
}

/// Whether the requested loan amount is at or above the annual salary.
///
/// Evaluated as its own predicate with its own bit, not derived by negating
/// [`loan_lt_salary`].
#[must_use]
pub fn loan_ge_salary(loan_amount: u32, annual_salary: u32) -> bool {
    loan_amount >= annual_salary
}

/// Whether the applicant already owns another home.
#[must_use]
pub fn existing_homeowner(owns_other_home: bool) -> bool {
    owns_other_home
}

#[inline]
fn bit(condition: bool, predicate: Predicate) -> u32 {
    if condition {
        predicate.bit()
    } else {
        0
    }
}

/// Encode one applicant's predicate truth values into a bitfield.
///
/// Pure: derived deterministically from the record's attributes alone, so
/// records may be encoded in any order or concurrently.
#[must_use]
pub fn encode(applicant: &Applicant) -> u32 {
    bit(
        has_proof_of_address(applicant.address.as_deref(), applicant.verify_address),
        Predicate::ProofOfAddress,
    ) | bit(
        has_proof_of_identity(applicant.identity.as_deref(), applicant.verify_identity),
        Predicate::ProofOfIdentity,
    ) | bit(
        loan_lt_salary(applicant.loan_amount, applicant.annual_salary),
        Predicate::LoanLtSalary,
    ) | bit(
        loan_ge_salary(applicant.loan_amount, applicant.annual_salary),
        Predicate::LoanGeSalary,
    ) | bit(
        existing_homeowner(applicant.owns_other_home),
        Predicate::ExistingOwner,
    )
}

/// Encode a batch of applicants, one bitfield per record, order preserved.
#[must_use]
pub fn encode_all(applicants: &[Applicant]) -> Vec<u32> {
    applicants.iter().map(encode).collect()
}
