use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::types::{Doctor, DoctorStatus};

const DOC_LIST: Symbol = symbol_short!("DOC_LIST");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_doctor_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn doctor_key(doctor: &Address) -> (Symbol, Address) {
    (symbol_short!("DOCTOR"), doctor.clone())
}

pub fn get_doctor(env: &Env, doctor: &Address) -> Option<Doctor> {
    env.storage().persistent().get(&doctor_key(doctor))
}

pub fn has_doctor(env: &Env, doctor: &Address) -> bool {
    env.storage().persistent().has(&doctor_key(doctor))
}

pub fn set_doctor(env: &Env, entry: &Doctor) {
    let key = doctor_key(&entry.address);
    env.storage().persistent().set(&key, entry);
    extend_ttl_doctor_key(env, &key);
}

/// True iff the doctor is registered and currently Active.
pub fn is_authorized(env: &Env, doctor: &Address) -> bool {
    match get_doctor(env, doctor) {
        Some(entry) => entry.status == DoctorStatus::Active,
        None => false,
    }
}

/// Appends a doctor to the insertion-ordered listing index.
///
/// The index only ever grows; deregistration flips the status on the entry
/// and leaves the index untouched.
pub fn append_to_list(env: &Env, doctor: &Address) {
    let mut doctors: Vec<Address> = env
        .storage()
        .persistent()
        .get(&DOC_LIST)
        .unwrap_or(Vec::new(env));
    doctors.push_back(doctor.clone());
    env.storage().persistent().set(&DOC_LIST, &doctors);
    env.storage()
        .persistent()
        .extend_ttl(&DOC_LIST, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// All registered doctor addresses in insertion order, Active or not.
pub fn list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DOC_LIST)
        .unwrap_or(Vec::new(env))
}
