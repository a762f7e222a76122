use soroban_sdk::{Address, Env};

use crate::consent;
use crate::errors::HealthError;
use crate::registry;

/// Decides whether `caller` may read or write `patient`'s records.
///
/// Allowed for the patient themselves, or for a doctor that is both
/// currently Active in the registry and currently consented by the patient.
/// Evaluated against committed state on every call; nothing is cached, so a
/// revocation or deregistration takes effect on the very next invocation.
pub fn can_manage_records(env: &Env, caller: &Address, patient: &Address) -> bool {
    if caller == patient {
        return true;
    }
    registry::is_authorized(env, caller) && consent::doctors_of(env, patient).contains(caller)
}

pub fn require_record_access(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<(), HealthError> {
    if can_manage_records(env, caller, patient) {
        return Ok(());
    }
    Err(HealthError::Unauthorized)
}
