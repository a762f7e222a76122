#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the consent lifecycle.
//!
//! These tests run arbitrary action sequences against one patient↔doctor
//! pair while tracking a reference model, and verify after every step that:
//! - the mirrored relation agrees in both directions
//! - `is_authorized_doctor` tracks registration status exactly
//! - the record sequence only ever grows

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};
use health_records::{HealthError, HealthRecordsContract, HealthRecordsContractClient};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Action {
    Book,
    ResolveByDoctor,
    RevokeAccess,
    PatientAddsRecord,
    DoctorAddsRecord,
    DeregisterDoctor,
}

/// Reference model for the single tracked pair.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PairState {
    None,
    Active,
    DoctorResolved,
    Revoked,
}

impl PairState {
    fn is_live(self) -> bool {
        matches!(self, PairState::Active | PairState::DoctorResolved)
    }
}

fn setup() -> (Env, HealthRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthRecordsContract, ());
    let client = HealthRecordsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner);

    (env, client, owner)
}

fn try_add_record(
    env: &Env,
    client: &HealthRecordsContractClient<'static>,
    caller: &Address,
    patient: &Address,
) -> Result<(), HealthError> {
    client
        .try_add_health_record(
            caller,
            patient,
            &170,
            &70,
            &String::from_str(env, "120/80"),
            &String::from_str(env, "normal"),
            &String::from_str(env, "flu"),
            &String::from_str(env, "rest"),
        )
        .map(|_| ())
        .map_err(|e| e.unwrap())
}

proptest! {
    /// Any interleaving of book / resolve / revoke / record / deregister
    /// keeps the contract state consistent with the reference model.
    #[test]
    fn prop_consent_lifecycle_consistent(
        actions in proptest::collection::vec(any::<Action>(), 1..24)
    ) {
        let (env, client, owner) = setup();

        let doctor = Address::generate(&env);
        client.register_doctor(
            &owner,
            &doctor,
            &String::from_str(&env, "MBBS"),
            &String::from_str(&env, "Cardiology"),
            &100,
        );
        let patient = Address::generate(&env);

        let mut pair = PairState::None;
        let mut doctor_active = true;
        let mut record_count: u32 = 0;

        for action in actions {
            match action {
                Action::Book => {
                    let result = client.try_book_appointment(
                        &patient,
                        &doctor,
                        &String::from_str(&env, "checkup"),
                    );
                    if !doctor_active {
                        prop_assert!(matches!(result, Err(Ok(HealthError::Unauthorized))));
                    } else if pair.is_live() {
                        prop_assert!(matches!(
                            result,
                            Err(Ok(HealthError::ConsentAlreadyActive))
                        ));
                    } else {
                        prop_assert!(result.is_ok());
                        pair = PairState::Active;
                    }
                }
                Action::ResolveByDoctor => {
                    let result = client.try_mark_appointment_done_by_doctor(&doctor, &patient);
                    match pair {
                        PairState::Active => {
                            prop_assert!(result.is_ok());
                            pair = PairState::DoctorResolved;
                        }
                        PairState::DoctorResolved => prop_assert!(result.is_ok()),
                        PairState::None | PairState::Revoked => prop_assert!(matches!(
                            result,
                            Err(Ok(HealthError::AppointmentNotFound))
                        )),
                    }
                }
                Action::RevokeAccess => {
                    let result =
                        client.try_mark_appointment_done_and_revoke_access(&patient, &doctor);
                    if pair.is_live() {
                        prop_assert!(result.is_ok());
                        pair = PairState::Revoked;
                    } else {
                        prop_assert!(matches!(
                            result,
                            Err(Ok(HealthError::AppointmentNotFound))
                        ));
                    }
                }
                Action::PatientAddsRecord => {
                    prop_assert!(try_add_record(&env, &client, &patient, &patient).is_ok());
                    record_count += 1;
                }
                Action::DoctorAddsRecord => {
                    let result = try_add_record(&env, &client, &doctor, &patient);
                    if pair.is_live() && doctor_active {
                        prop_assert!(result.is_ok());
                        record_count += 1;
                    } else {
                        prop_assert!(matches!(result, Err(HealthError::Unauthorized)));
                    }
                }
                Action::DeregisterDoctor => {
                    let result = client.try_deregister_doctor(
                        &owner,
                        &doctor,
                        &String::from_str(&env, "retired"),
                    );
                    prop_assert!(result.is_ok());
                    doctor_active = false;
                }
            }

            // Mirror consistency in both directions after every step
            let doctors = client.get_assigned_doctors_of_patient(&patient);
            let patients = client.get_patients_of_doctor(&doctor);
            prop_assert_eq!(doctors.contains(&doctor), patients.contains(&patient));
            prop_assert_eq!(doctors.contains(&doctor), pair.is_live());

            // Registry status tracks the model
            prop_assert_eq!(client.is_authorized_doctor(&doctor), doctor_active);

            // The record sequence only grows, whatever else happened
            let entries = client.view_health_records(&patient, &patient);
            prop_assert_eq!(entries.len(), record_count);
        }
    }

    /// A second `initialize` call must always fail with `AlreadyInitialized`.
    #[test]
    fn prop_double_initialize_always_fails(_seed in 0u8..=255u8) {
        let (env, client, _owner) = setup();

        let second_owner = Address::generate(&env);
        let result = client.try_initialize(&second_owner);

        prop_assert!(result.is_err(), "Double initialize must always fail");
        match result {
            Err(Ok(e)) => prop_assert_eq!(e, HealthError::AlreadyInitialized),
            _ => prop_assert!(false, "Expected AlreadyInitialized error"),
        }
    }
}
