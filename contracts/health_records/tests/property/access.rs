#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property tests for the authorization decision.
//!
//! Invariants tested:
//! - Registration is owner-only: any other caller fails and changes nothing
//! - A patient can always manage their own records, whatever the consent state
//! - A doctor can manage a patient's records iff consented AND still Active

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};
use health_records::{HealthError, HealthRecordsContract, HealthRecordsContractClient};

fn setup() -> (Env, HealthRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthRecordsContract, ());
    let client = HealthRecordsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner);

    (env, client, owner)
}

fn add_record(
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
    /// A non-owner caller can never register a doctor, and the registry is
    /// left untouched by the attempt.
    #[test]
    fn prop_register_is_owner_only(_seed in 0u8..=255u8) {
        let (env, client, _owner) = setup();

        let intruder = Address::generate(&env);
        let doctor = Address::generate(&env);

        let result = client.try_register_doctor(
            &intruder,
            &doctor,
            &String::from_str(&env, "MBBS"),
            &String::from_str(&env, "Cardiology"),
            &100,
        );

        prop_assert!(matches!(result, Err(Ok(HealthError::Unauthorized))));
        prop_assert!(!client.is_authorized_doctor(&doctor));
        prop_assert_eq!(client.list_doctors().len(), 0);
    }

    /// The patient can always read and write their own records, independent
    /// of any consent or registry state.
    #[test]
    fn prop_patient_always_has_self_access(record_count in 1usize..6) {
        let (env, client, _owner) = setup();

        let patient = Address::generate(&env);
        for _ in 0..record_count {
            prop_assert!(add_record(&env, &client, &patient, &patient).is_ok());
        }

        let entries = client.view_health_records(&patient, &patient);
        prop_assert_eq!(entries.len() as usize, record_count);
    }

    /// A doctor may manage a patient's records exactly while both conditions
    /// hold: the consent is live and the doctor is Active in the registry.
    /// Dropping either one closes the door.
    #[test]
    fn prop_doctor_access_tracks_consent_and_status(revoke_first in any::<bool>()) {
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

        // No consent yet: denied
        prop_assert!(matches!(
            add_record(&env, &client, &doctor, &patient),
            Err(HealthError::Unauthorized)
        ));

        client.book_appointment(&patient, &doctor, &String::from_str(&env, "checkup"));
        prop_assert!(add_record(&env, &client, &doctor, &patient).is_ok());

        // Close either side of the conjunction and access must disappear
        if revoke_first {
            client.mark_appointment_done_and_revoke_access(&patient, &doctor);
        } else {
            client.deregister_doctor(&owner, &doctor, &String::from_str(&env, "retired"));
        }

        prop_assert!(matches!(
            add_record(&env, &client, &doctor, &patient),
            Err(HealthError::Unauthorized)
        ));

        // Records written while access was live remain readable to the patient
        let entries = client.view_health_records(&patient, &patient);
        prop_assert_eq!(entries.len(), 1);
    }
}
