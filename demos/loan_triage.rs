use triage::policy::{loan_policy, IMMEDIATE, MANUAL, REJECT};
use triage::{encode_all, Applicant, IdSequence, VerifyMethods};

fn main() {
    let table = loan_policy().expect("failed to compile loan policy");
    println!("{table}");

    let mut seq = IdSequence::new();
    let records = vec![
        // fully verified, loan well under salary
        Applicant {
            id: seq.next_id(),
            address: Some("1234 Plumb Street".to_owned()),
            identity: Some("Jennifer Jansen".to_owned()),
            owns_other_home: false,
            annual_salary: 95_000,
            loan_amount: 30_000,
            verify_address: VerifyMethods::STATE_ID,
            verify_identity: VerifyMethods::PASSPORT,
        },
        // verified homeowner asking for more than a year's salary
        Applicant {
            id: seq.next_id(),
            address: Some("8476 Noble Fox Court".to_owned()),
            identity: Some("Robert Clarke".to_owned()),
            owns_other_home: true,
            annual_salary: 120_000,
            loan_amount: 400_000,
            verify_address: VerifyMethods::PASSPORT,
            verify_identity: VerifyMethods::STATE_ID,
        },
        // utility bill only: weak proof, rejected on both counts
        Applicant {
            id: seq.next_id(),
            address: Some("6847 Lazy Panda Lane".to_owned()),
            identity: Some("Ann Kim-Lee".to_owned()),
            owns_other_home: false,
            annual_salary: 60_000,
            loan_amount: 20_000,
            verify_address: VerifyMethods::UTILITY,
            verify_identity: VerifyMethods::UTILITY,
        },
        // no identity on file
        Applicant {
            id: seq.next_id(),
            address: Some("5876 Clark Drive".to_owned()),
            identity: None,
            owns_other_home: false,
            annual_salary: 80_000,
            loan_amount: 50_000,
            verify_address: VerifyMethods::STATE_ID,
            verify_identity: VerifyMethods::NONE,
        },
    ];

    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    let bitfields = encode_all(&records);
    let mut outputs = table
        .outputs(records.len())
        .expect("failed to allocate outputs");

    let report = table
        .classify_detailed(&ids, &bitfields, &mut outputs)
        .expect("classification failed");
    println!("{report}");

    for action in [REJECT, IMMEDIATE, MANUAL] {
        let bucket = outputs.get(action).expect("action bucket");
        let members: Vec<u32> = bucket.iter().collect();
        println!("{action:>10}: {members:?}");
    }
}
