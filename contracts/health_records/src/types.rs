use soroban_sdk::{contracttype, Address, String};

/// Registration status of a doctor.
///
/// Deregistration flips the status to `Inactive`; the entry itself is kept
/// forever so that records authored by the doctor stay attributable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DoctorStatus {
    Active,
    Inactive,
}

/// A registered service provider.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub address: Address,
    pub qualification: String,
    pub specialization: String,
    pub fees: u64,
    pub status: DoctorStatus,
    pub registered_at: u64,
    pub registered_by: Address,
    /// Empty until the doctor is deregistered.
    pub deregistered_reason: String,
}

/// Lifecycle of a patient↔doctor consent.
///
/// Booking activates the consent immediately. `DoctorResolved` records the
/// doctor's side of completion without removing access; only the patient's
/// revocation ends the grant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppointmentStatus {
    Active,
    DoctorResolved,
    Revoked,
}

/// A booked appointment, doubling as the consent grant for the pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Appointment {
    pub patient: Address,
    pub doctor: Address,
    pub reason: String,
    pub status: AppointmentStatus,
    pub created_at: u64,
}

/// An immutable health record entry. Appended once, never edited.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthRecord {
    pub patient: Address,
    pub height: u32,
    pub weight: u32,
    pub blood_pressure: String,
    pub cholesterol: String,
    pub diagnosis: String,
    pub treatment: String,
    pub added_by: Address,
    pub timestamp: u64,
}
