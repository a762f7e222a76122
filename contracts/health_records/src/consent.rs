use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::types::{Appointment, AppointmentStatus};

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_pair_key(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_index_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn appointment_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (symbol_short!("APPT"), patient.clone(), doctor.clone())
}

pub fn doctors_of_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("DOCS_OF"), patient.clone())
}

pub fn patients_of_key(doctor: &Address) -> (Symbol, Address) {
    (symbol_short!("PATS_OF"), doctor.clone())
}

pub fn get_appointment(env: &Env, patient: &Address, doctor: &Address) -> Option<Appointment> {
    env.storage()
        .persistent()
        .get(&appointment_key(patient, doctor))
}

pub fn set_appointment(env: &Env, appointment: &Appointment) {
    let key = appointment_key(&appointment.patient, &appointment.doctor);
    env.storage().persistent().set(&key, appointment);
    extend_ttl_pair_key(env, &key);
}

/// A consent is live while it has not been revoked by the patient.
///
/// A `DoctorResolved` appointment still grants access (the doctor recorded
/// their side of completion, the patient has not yet revoked), so it also
/// blocks a fresh booking for the pair.
pub fn has_live_consent(env: &Env, patient: &Address, doctor: &Address) -> bool {
    match get_appointment(env, patient, doctor) {
        Some(appointment) => appointment.status != AppointmentStatus::Revoked,
        None => false,
    }
}

/// The live set of doctors consented by `patient`.
pub fn doctors_of(env: &Env, patient: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&doctors_of_key(patient))
        .unwrap_or(Vec::new(env))
}

/// The live set of patients that consented to `doctor`. Mirror of `doctors_of`.
pub fn patients_of(env: &Env, doctor: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&patients_of_key(doctor))
        .unwrap_or(Vec::new(env))
}

/// Inserts the pair into both sides of the mirrored relation.
///
/// Both writes land in the same contract invocation, so the ledger commits
/// them as one unit; the relation can never be observed half-applied.
pub fn link_pair(env: &Env, patient: &Address, doctor: &Address) {
    let doctors_key = doctors_of_key(patient);
    let mut doctors = doctors_of(env, patient);
    if !doctors.contains(doctor) {
        doctors.push_back(doctor.clone());
    }
    env.storage().persistent().set(&doctors_key, &doctors);
    extend_ttl_index_key(env, &doctors_key);

    let patients_key = patients_of_key(doctor);
    let mut patients = patients_of(env, doctor);
    if !patients.contains(patient) {
        patients.push_back(patient.clone());
    }
    env.storage().persistent().set(&patients_key, &patients);
    extend_ttl_index_key(env, &patients_key);
}

/// Removes the pair from both sides of the mirrored relation in one commit.
pub fn unlink_pair(env: &Env, patient: &Address, doctor: &Address) {
    let doctors_key = doctors_of_key(patient);
    let doctors = doctors_of(env, patient);
    let mut remaining_doctors = Vec::new(env);
    for entry in doctors.iter() {
        if entry != *doctor {
            remaining_doctors.push_back(entry);
        }
    }
    env.storage()
        .persistent()
        .set(&doctors_key, &remaining_doctors);
    extend_ttl_index_key(env, &doctors_key);

    let patients_key = patients_of_key(doctor);
    let patients = patients_of(env, doctor);
    let mut remaining_patients = Vec::new(env);
    for entry in patients.iter() {
        if entry != *patient {
            remaining_patients.push_back(entry);
        }
    }
    env.storage()
        .persistent()
        .set(&patients_key, &remaining_patients);
    extend_ttl_index_key(env, &patients_key);
}
