mod classify;
mod compile;
mod encode;
mod error;
pub mod policy;
mod types;

pub use encode::{
    encode, encode_all, existing_homeowner, has_proof_of_address, has_proof_of_identity,
    loan_ge_salary, loan_lt_salary,
};
pub use error::TriageError;
pub use types::{
    ActionOutputs, AllocationError, Applicant, ApplicantId, ClassifyError, ClassifyReport,
    Condition, ConfigError, DecisionTable, DecisionTableBuilder, IdSequence, IdTable, Predicate,
    RuleMask, VerifyMethods, BIT_WIDTH,
};
