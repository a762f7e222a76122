#![no_std]
#![allow(clippy::too_many_arguments)]

pub mod access;
pub mod consent;
pub mod errors;
pub mod events;
pub mod records;
pub mod registry;
pub mod types;
pub mod validation;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ErrorCategory, ErrorSeverity, HealthError};
pub use types::{Appointment, AppointmentStatus, Doctor, DoctorStatus, HealthRecord};

/// Storage keys for the contract
const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// TTL constants for instance storage (in ledgers)
const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

#[contract]
pub struct HealthRecordsContract;

#[contractimpl]
impl HealthRecordsContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the contract with the owner address.
    ///
    /// The owner is the only principal allowed to manage the doctor registry
    /// and cannot be changed afterwards.
    pub fn initialize(env: Env, owner: Address) -> Result<(), HealthError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(HealthError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_initialized(&env, owner);

        Ok(())
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Result<Address, HealthError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(HealthError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Check whether an address is the contract owner
    pub fn is_owner(env: Env, id: Address) -> bool {
        match env.storage().instance().get::<_, Address>(&OWNER) {
            Some(owner) => owner == id,
            None => false,
        }
    }

    // ── Doctor Registry ──────────────────────────────────────────────────────

    /// Register a new doctor. Owner only.
    ///
    /// The entry is created Active. A previously deregistered address cannot
    /// be registered again; the registry keeps one entry per address for the
    /// lifetime of the contract.
    pub fn register_doctor(
        env: Env,
        caller: Address,
        doctor: Address,
        qualification: String,
        specialization: String,
        fees: u64,
    ) -> Result<(), HealthError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        validation::validate_text(&qualification)?;
        validation::validate_text(&specialization)?;

        if registry::has_doctor(&env, &doctor) {
            return Err(HealthError::DoctorAlreadyRegistered);
        }

        let entry = Doctor {
            address: doctor.clone(),
            qualification: qualification.clone(),
            specialization: specialization.clone(),
            fees,
            status: DoctorStatus::Active,
            registered_at: env.ledger().timestamp(),
            registered_by: caller,
            deregistered_reason: String::from_str(&env, ""),
        };

        registry::set_doctor(&env, &entry);
        registry::append_to_list(&env, &doctor);

        events::publish_doctor_registered(&env, doctor, qualification, specialization, fees);

        Ok(())
    }

    /// Deregister a doctor. Owner only.
    ///
    /// Flips the status to Inactive and records the reason. The registry
    /// entry, the doctor's live consents, and every record the doctor
    /// authored are left in place; access decisions exclude the doctor from
    /// here on through the Active-status check.
    pub fn deregister_doctor(
        env: Env,
        caller: Address,
        doctor: Address,
        reason: String,
    ) -> Result<(), HealthError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        validation::validate_text(&reason)?;

        let mut entry = registry::get_doctor(&env, &doctor).ok_or(HealthError::DoctorNotFound)?;

        if entry.status == DoctorStatus::Inactive {
            return Ok(());
        }

        entry.status = DoctorStatus::Inactive;
        entry.deregistered_reason = reason.clone();
        registry::set_doctor(&env, &entry);

        events::publish_doctor_deregistered(&env, doctor, reason);

        Ok(())
    }

    /// Check whether an address is a registered, currently Active doctor
    pub fn is_authorized_doctor(env: Env, id: Address) -> bool {
        registry::is_authorized(&env, &id)
    }

    /// Get a doctor's registry entry
    pub fn get_doctor(env: Env, id: Address) -> Result<Doctor, HealthError> {
        registry::get_doctor(&env, &id).ok_or(HealthError::DoctorNotFound)
    }

    /// List all doctors ever registered, in registration order.
    ///
    /// Includes Inactive entries so clients can render the full history.
    pub fn list_doctors(env: Env) -> Vec<Doctor> {
        let mut doctors = Vec::new(&env);
        for address in registry::list(&env).iter() {
            if let Some(entry) = registry::get_doctor(&env, &address) {
                doctors.push_back(entry);
            }
        }
        doctors
    }

    // ── Appointments & Consent ───────────────────────────────────────────────

    /// Book an appointment with a doctor. Caller is the patient.
    ///
    /// Booking immediately grants the doctor access to the patient's records
    /// and links both sides of the mirrored relation in the same commit.
    pub fn book_appointment(
        env: Env,
        patient: Address,
        doctor: Address,
        reason: String,
    ) -> Result<(), HealthError> {
        patient.require_auth();

        validation::validate_text(&reason)?;

        let entry = registry::get_doctor(&env, &doctor).ok_or(HealthError::DoctorNotFound)?;
        if entry.status != DoctorStatus::Active {
            return Err(HealthError::Unauthorized);
        }

        if consent::has_live_consent(&env, &patient, &doctor) {
            return Err(HealthError::ConsentAlreadyActive);
        }

        let appointment = Appointment {
            patient: patient.clone(),
            doctor: doctor.clone(),
            reason,
            status: AppointmentStatus::Active,
            created_at: env.ledger().timestamp(),
        };

        consent::set_appointment(&env, &appointment);
        consent::link_pair(&env, &patient, &doctor);

        events::publish_appointment_booked(&env, patient, doctor);

        Ok(())
    }

    /// Record the doctor's side of appointment completion. Caller is the
    /// consented doctor.
    ///
    /// Does not remove access: the mirrored relation stays intact until the
    /// patient revokes.
    pub fn mark_appointment_done_by_doctor(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<(), HealthError> {
        doctor.require_auth();

        let mut appointment = consent::get_appointment(&env, &patient, &doctor)
            .ok_or(HealthError::AppointmentNotFound)?;

        if appointment.status == AppointmentStatus::Revoked {
            return Err(HealthError::AppointmentNotFound);
        }
        if appointment.status == AppointmentStatus::DoctorResolved {
            return Ok(());
        }

        appointment.status = AppointmentStatus::DoctorResolved;
        consent::set_appointment(&env, &appointment);

        events::publish_appointment_resolved(&env, patient, doctor);

        Ok(())
    }

    /// Close out an appointment and revoke the doctor's access. Caller is
    /// the patient.
    ///
    /// Both sides of the mirrored relation are removed in the same commit,
    /// so the relation is never observable half-applied.
    pub fn mark_appointment_done_and_revoke_access(
        env: Env,
        patient: Address,
        doctor: Address,
    ) -> Result<(), HealthError> {
        patient.require_auth();

        let mut appointment = consent::get_appointment(&env, &patient, &doctor)
            .ok_or(HealthError::AppointmentNotFound)?;

        if appointment.status == AppointmentStatus::Revoked {
            return Err(HealthError::AppointmentNotFound);
        }

        appointment.status = AppointmentStatus::Revoked;
        consent::set_appointment(&env, &appointment);
        consent::unlink_pair(&env, &patient, &doctor);

        events::publish_access_revoked(&env, patient, doctor);

        Ok(())
    }

    /// Get the stored appointment for a pair, whatever its status
    pub fn get_appointment(
        env: Env,
        patient: Address,
        doctor: Address,
    ) -> Result<Appointment, HealthError> {
        consent::get_appointment(&env, &patient, &doctor).ok_or(HealthError::AppointmentNotFound)
    }

    /// Doctors currently consented by the patient
    pub fn get_assigned_doctors_of_patient(env: Env, patient: Address) -> Vec<Address> {
        consent::doctors_of(&env, &patient)
    }

    /// Patients that currently consent to the doctor
    pub fn get_patients_of_doctor(env: Env, doctor: Address) -> Vec<Address> {
        consent::patients_of(&env, &doctor)
    }

    // ── Health Records ───────────────────────────────────────────────────────

    /// Append a health record for a patient.
    ///
    /// Allowed for the patient themselves or for an Active doctor currently
    /// consented by the patient. The record is stamped with the caller and
    /// the ledger timestamp and can never be edited afterwards.
    pub fn add_health_record(
        env: Env,
        caller: Address,
        patient: Address,
        height: u32,
        weight: u32,
        blood_pressure: String,
        cholesterol: String,
        diagnosis: String,
        treatment: String,
    ) -> Result<(), HealthError> {
        caller.require_auth();

        validation::validate_measurement(height)?;
        validation::validate_measurement(weight)?;
        validation::validate_text(&blood_pressure)?;
        validation::validate_text(&cholesterol)?;
        validation::validate_text(&diagnosis)?;
        validation::validate_text(&treatment)?;

        access::require_record_access(&env, &caller, &patient)?;

        let record = HealthRecord {
            patient: patient.clone(),
            height,
            weight,
            blood_pressure,
            cholesterol,
            diagnosis,
            treatment,
            added_by: caller.clone(),
            timestamp: env.ledger().timestamp(),
        };

        let count = records::append(&env, &record);

        events::publish_record_added(&env, patient, caller, count);

        Ok(())
    }

    /// View a patient's records in append order.
    ///
    /// Same access rule as writing. Returns an empty sequence when the
    /// patient has no records; revoked or deregistered authors do not filter
    /// the history.
    pub fn view_health_records(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<HealthRecord>, HealthError> {
        caller.require_auth();

        access::require_record_access(&env, &caller, &patient)?;

        Ok(records::records_of(&env, &patient))
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Internal Helpers ─────────────────────────────────────────────────────

    fn require_owner(env: &Env, caller: &Address) -> Result<(), HealthError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(HealthError::NotInitialized)?;
        if *caller != owner {
            return Err(HealthError::Unauthorized);
        }
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
        Ok(())
    }
}
