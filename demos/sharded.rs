use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triage::policy::loan_policy;
use triage::{encode_all, Applicant, IdSequence, VerifyMethods};

const RECORDS: usize = 1_000_000;
const SHARDS: usize = 4;

fn main() {
    let table = Arc::new(loan_policy().expect("failed to compile loan policy"));

    let addresses = [Some("3152 Crystal Brook Drive"), None, Some("8476 Noble Fox Court")];
    let identities = [Some("Denise Masters"), Some("James Smith"), None];
    let methods = [
        VerifyMethods::NONE,
        VerifyMethods::STATE_ID,
        VerifyMethods::PASSPORT,
        VerifyMethods::UTILITY,
    ];

    let mut rng = StdRng::seed_from_u64(0xFEED);
    let mut seq = IdSequence::new();
    let records: Vec<Applicant> = (0..RECORDS)
        .map(|_| Applicant {
            id: seq.next_id(),
            address: addresses[rng.random_range(0..addresses.len())].map(str::to_owned),
            identity: identities[rng.random_range(0..identities.len())].map(str::to_owned),
            owns_other_home: rng.random_bool(0.5),
            annual_salary: rng.random_range(10_000..=250_000),
            loan_amount: rng.random_range(1_000..=500_000),
            verify_address: methods[rng.random_range(0..methods.len())],
            verify_identity: methods[rng.random_range(0..methods.len())],
        })
        .collect();

    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    let bitfields = encode_all(&records);

    // Each shard classifies its record range into thread-local outputs;
    // the shards are concatenated afterwards. Buckets are never shared
    // across threads mid-pass.
    let shard_len = RECORDS / SHARDS;
    let shard_outputs = thread::scope(|scope| {
        let handles: Vec<_> = (0..SHARDS)
            .map(|shard| {
                let table = Arc::clone(&table);
                let ids = &ids[shard * shard_len..(shard + 1) * shard_len];
                let bitfields = &bitfields[shard * shard_len..(shard + 1) * shard_len];
                scope.spawn(move || {
                    let mut outputs = table.outputs(ids.len()).expect("shard outputs");
                    table
                        .classify(ids, bitfields, &mut outputs)
                        .expect("shard classify");
                    outputs
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("shard thread panicked"))
            .collect::<Vec<_>>()
    });

    let mut merged = table.outputs(0).expect("merged outputs");
    for shard in &shard_outputs {
        merged.merge(shard).expect("merge shard");
    }

    println!("classified {RECORDS} records across {SHARDS} shards:");
    for (action, bucket) in merged.iter() {
        println!("{action:>10}: {}", bucket.len());
    }
}
