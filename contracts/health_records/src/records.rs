use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::types::HealthRecord;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

pub fn patient_records_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("PAT_REC"), patient.clone())
}

/// All records for a patient in append order. Empty when none exist.
pub fn records_of(env: &Env, patient: &Address) -> Vec<HealthRecord> {
    env.storage()
        .persistent()
        .get(&patient_records_key(patient))
        .unwrap_or(Vec::new(env))
}

/// Appends a record to the patient's sequence and returns the new length.
///
/// Existing entries are never rewritten or reordered; the sequence only grows.
pub fn append(env: &Env, record: &HealthRecord) -> u32 {
    let key = patient_records_key(&record.patient);
    let mut entries = records_of(env, &record.patient);
    entries.push_back(record.clone());
    env.storage().persistent().set(&key, &entries);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    entries.len()
}
