use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when a new doctor is registered.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorRegisteredEvent {
    pub doctor: Address,
    pub qualification: String,
    pub specialization: String,
    pub fees: u64,
    pub timestamp: u64,
}

/// Event published when a doctor is deregistered.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorDeregisteredEvent {
    pub doctor: Address,
    pub reason: String,
    pub timestamp: u64,
}

/// Event published when a patient books an appointment with a doctor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppointmentBookedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a doctor marks their side of an appointment done.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppointmentResolvedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a patient revokes a doctor's access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a health record is appended.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub patient: Address,
    pub added_by: Address,
    /// Number of records for the patient after the append.
    pub count: u32,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a new doctor is registered.
pub fn publish_doctor_registered(
    env: &Env,
    doctor: Address,
    qualification: String,
    specialization: String,
    fees: u64,
) {
    let topics = (symbol_short!("DOC_REG"), doctor.clone());
    let data = DoctorRegisteredEvent {
        doctor,
        qualification,
        specialization,
        fees,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a doctor is deregistered.
pub fn publish_doctor_deregistered(env: &Env, doctor: Address, reason: String) {
    let topics = (symbol_short!("DOC_DEREG"), doctor.clone());
    let data = DoctorDeregisteredEvent {
        doctor,
        reason,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when an appointment is booked and consent activates.
pub fn publish_appointment_booked(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("APPT_BOOK"), patient.clone(), doctor.clone());
    let data = AppointmentBookedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a doctor resolves their side of an appointment.
pub fn publish_appointment_resolved(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("APPT_DONE"), patient.clone(), doctor.clone());
    let data = AppointmentResolvedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a patient revokes a doctor's access.
pub fn publish_access_revoked(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("ACC_REV"), patient.clone(), doctor.clone());
    let data = AccessRevokedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a health record is appended.
pub fn publish_record_added(env: &Env, patient: Address, added_by: Address, count: u32) {
    let topics = (symbol_short!("REC_ADD"), patient.clone(), added_by.clone());
    let data = RecordAddedEvent {
        patient,
        added_by,
        count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
