#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};
use health_records::{HealthRecordsContract, HealthRecordsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    RegisterDoctor { fees: u64, caller_pick: u8 },
    DeregisterDoctor { doctor_pick: u8, caller_pick: u8 },
    BookAppointment { patient_pick: u8, doctor_pick: u8 },
    ResolveByDoctor { patient_pick: u8, doctor_pick: u8 },
    RevokeAccess { patient_pick: u8, doctor_pick: u8 },
    AddRecord { patient_pick: u8, caller_pick: u8, height: u32, weight: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthRecordsContract, ());
    let client = HealthRecordsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let _ = client.try_initialize(&owner);

    let mut doctors = vec![];
    let mut principals = vec![owner.clone()];
    for _ in 0..4 {
        principals.push(Address::generate(&env));
    }

    for action in actions {
        match action {
            FuzzAction::RegisterDoctor { fees, caller_pick } => {
                let doctor = Address::generate(&env);
                let caller = &principals[caller_pick as usize % principals.len()];
                let _ = client.try_register_doctor(
                    caller,
                    &doctor,
                    &String::from_str(&env, "MBBS"),
                    &String::from_str(&env, "General"),
                    &fees,
                );
                doctors.push(doctor);
            }
            FuzzAction::DeregisterDoctor {
                doctor_pick,
                caller_pick,
            } => {
                if doctors.is_empty() {
                    continue;
                }
                let doctor = &doctors[doctor_pick as usize % doctors.len()];
                let caller = &principals[caller_pick as usize % principals.len()];
                let _ = client.try_deregister_doctor(
                    caller,
                    doctor,
                    &String::from_str(&env, "retired"),
                );
            }
            FuzzAction::BookAppointment {
                patient_pick,
                doctor_pick,
            } => {
                if doctors.is_empty() {
                    continue;
                }
                let patient = &principals[patient_pick as usize % principals.len()];
                let doctor = &doctors[doctor_pick as usize % doctors.len()];
                let _ = client.try_book_appointment(
                    patient,
                    doctor,
                    &String::from_str(&env, "checkup"),
                );
            }
            FuzzAction::ResolveByDoctor {
                patient_pick,
                doctor_pick,
            } => {
                if doctors.is_empty() {
                    continue;
                }
                let patient = &principals[patient_pick as usize % principals.len()];
                let doctor = &doctors[doctor_pick as usize % doctors.len()];
                let _ = client.try_mark_appointment_done_by_doctor(doctor, patient);
            }
            FuzzAction::RevokeAccess {
                patient_pick,
                doctor_pick,
            } => {
                if doctors.is_empty() {
                    continue;
                }
                let patient = &principals[patient_pick as usize % principals.len()];
                let doctor = &doctors[doctor_pick as usize % doctors.len()];
                let _ = client.try_mark_appointment_done_and_revoke_access(patient, doctor);
            }
            FuzzAction::AddRecord {
                patient_pick,
                caller_pick,
                height,
                weight,
            } => {
                let patient = &principals[patient_pick as usize % principals.len()];
                let caller = &principals[caller_pick as usize % principals.len()];
                let _ = client.try_add_health_record(
                    caller,
                    patient,
                    &height,
                    &weight,
                    &String::from_str(&env, "120/80"),
                    &String::from_str(&env, "normal"),
                    &String::from_str(&env, "flu"),
                    &String::from_str(&env, "rest"),
                );
            }
        }
    }

    // The mirrored relation must agree in both directions after any sequence.
    for patient in &principals {
        for doctor in &doctors {
            let forward = client
                .get_assigned_doctors_of_patient(patient)
                .contains(doctor);
            let backward = client.get_patients_of_doctor(doctor).contains(patient);
            assert_eq!(forward, backward);
        }
    }
});
