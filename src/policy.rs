//! The stock loan-triage policy: the decision table routing applicants to
//! `reject`, `immediate`, or `manual` handling, plus a branchy reference
//! path used to cross-check the mask-based classifier.

use crate::encode::{
    existing_homeowner, has_proof_of_address, has_proof_of_identity, loan_ge_salary,
    loan_lt_salary,
};
use crate::{AllocationError, Applicant, ConfigError, DecisionTable, DecisionTableBuilder, IdTable, Predicate};

/// Action for applications declined outright.
pub const REJECT: &str = "reject";
/// Action for applications approved without review.
pub const IMMEDIATE: &str = "immediate";
/// Action for applications needing manual review.
pub const MANUAL: &str = "manual";

/// The stock loan policy.
///
/// ```text
/// predicate:      | rule columns:
/// ----------------+----+----+----+----+----
/// address proof   | F  | -  | T  | T  | T
/// identity proof  | -  | F  | T  | T  | T
/// loan < salary   | -  | -  | T  | -  | -
/// loan >= salary  | -  | -  | -  | -  | T
/// homeowner       | -  | -  | -  | T  | -
/// ----------------+----+----+----+----+----
/// action          | RJ | RJ | IM | IM | MN
/// ```
///
/// Missing address proof or missing identity proof each reject on their
/// own, so an applicant lacking both lands in `reject` twice.
///
/// # Errors
///
/// Returns [`ConfigError`] if compilation fails; the table is well-formed,
/// so this only happens if the predicate schema and the columns drift apart.
pub fn loan_policy() -> Result<DecisionTable, ConfigError> {
    use crate::Condition::{DontCare as N, MustBeFalse as F, MustBeTrue as T};

    DecisionTableBuilder::new(Predicate::COUNT)
        .column(&[F, N, N, N, N])
        .column(&[N, F, N, N, N])
        .column(&[T, T, T, N, N])
        .column(&[T, T, N, N, T])
        .column(&[T, T, N, T, N])
        .bind(0, REJECT)
        .bind(1, REJECT)
        .bind(2, IMMEDIATE)
        .bind(3, IMMEDIATE)
        .bind(4, MANUAL)
        .compile()
}

/// Branchy reference classification of a single applicant.
///
/// Re-derives every predicate through the same functions the encoder uses
/// and routes with ordinary conditionals, rule by rule in column order.
/// Must produce the same output-collection membership as encoding plus
/// [`DecisionTable::classify()`] with [`loan_policy()`]; it exists as the
/// correctness and performance baseline for the mask path.
///
/// # Errors
///
/// Returns [`AllocationError`] if an output table cannot grow.
pub fn check_applicant(
    applicant: &Applicant,
    reject: &mut IdTable,
    immediate: &mut IdTable,
    manual: &mut IdTable,
) -> Result<(), AllocationError> {
    let proof_address =
        has_proof_of_address(applicant.address.as_deref(), applicant.verify_address);
    let proof_identity =
        has_proof_of_identity(applicant.identity.as_deref(), applicant.verify_identity);
    let lt_salary = loan_lt_salary(applicant.loan_amount, applicant.annual_salary);
    let ge_salary = loan_ge_salary(applicant.loan_amount, applicant.annual_salary);
    let homeowner = existing_homeowner(applicant.owns_other_home);

    if !proof_address {
        reject.push(applicant.id)?;
    }
    if !proof_identity {
        reject.push(applicant.id)?;
    }
    if proof_address && proof_identity && lt_salary {
        immediate.push(applicant.id)?;
    }
    if proof_address && proof_identity && homeowner {
        immediate.push(applicant.id)?;
    }
    if proof_address && proof_identity && ge_salary {
        manual.push(applicant.id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode_all, VerifyMethods};

    fn applicant(id: u32) -> Applicant {
        Applicant {
            id,
            address: Some("5876 Clark Drive".to_owned()),
            identity: Some("Robert Clarke".to_owned()),
            owns_other_home: false,
            annual_salary: 90_000,
            loan_amount: 30_000,
            verify_address: VerifyMethods::STATE_ID,
            verify_identity: VerifyMethods::PASSPORT,
        }
    }

    #[test]
    fn policy_compiles() {
        let table = loan_policy().unwrap();
        assert_eq!(table.rows(), Predicate::COUNT);
        assert_eq!(table.columns(), 5);
        assert_eq!(table.actions(), vec![REJECT, IMMEDIATE, MANUAL]);
    }

    #[test]
    fn verified_low_loan_goes_immediate() {
        let table = loan_policy().unwrap();
        let records = vec![applicant(1)];
        let bitfields = encode_all(&records);
        let mut outputs = table.outputs(records.len()).unwrap();

        table.classify(&[1], &bitfields, &mut outputs).unwrap();
        assert_eq!(outputs.get(IMMEDIATE).unwrap().as_slice(), &[1]);
        assert!(outputs.get(REJECT).unwrap().is_empty());
        assert!(outputs.get(MANUAL).unwrap().is_empty());
    }

    #[test]
    fn branchy_agrees_on_each_scenario() {
        let table = loan_policy().unwrap();

        let mut scenarios = Vec::new();
        // verified, loan under salary
        scenarios.push(applicant(0));
        // verified homeowner with large loan: immediate and manual
        let mut a = applicant(1);
        a.owns_other_home = true;
        a.loan_amount = 200_000;
        scenarios.push(a);
        // no proofs at all: double reject
        let mut a = applicant(2);
        a.address = None;
        a.identity = None;
        a.verify_address = VerifyMethods::NONE;
        a.verify_identity = VerifyMethods::NONE;
        scenarios.push(a);
        // utility bill only
        let mut a = applicant(3);
        a.verify_address = VerifyMethods::UTILITY;
        a.verify_identity = VerifyMethods::UTILITY;
        scenarios.push(a);

        let ids: Vec<u32> = scenarios.iter().map(|a| a.id).collect();
        let bitfields = encode_all(&scenarios);
        let mut outputs = table.outputs(scenarios.len()).unwrap();
        table.classify(&ids, &bitfields, &mut outputs).unwrap();

        let mut reject = IdTable::new();
        let mut immediate = IdTable::new();
        let mut manual = IdTable::new();
        for record in &scenarios {
            check_applicant(record, &mut reject, &mut immediate, &mut manual).unwrap();
        }

        assert_eq!(outputs.get(REJECT).unwrap().as_slice(), reject.as_slice());
        assert_eq!(
            outputs.get(IMMEDIATE).unwrap().as_slice(),
            immediate.as_slice()
        );
        assert_eq!(outputs.get(MANUAL).unwrap().as_slice(), manual.as_slice());
    }

    #[test]
    fn missing_both_proofs_rejects_twice() {
        let table = loan_policy().unwrap();
        let blank = Applicant {
            id: 42,
            address: None,
            identity: None,
            owns_other_home: false,
            annual_salary: 50_000,
            loan_amount: 10_000,
            verify_address: VerifyMethods::NONE,
            verify_identity: VerifyMethods::NONE,
        };
        let bitfields = encode_all(std::slice::from_ref(&blank));
        let mut outputs = table.outputs(1).unwrap();

        table.classify(&[42], &bitfields, &mut outputs).unwrap();
        assert_eq!(outputs.get(REJECT).unwrap().as_slice(), &[42, 42]);
    }
}
