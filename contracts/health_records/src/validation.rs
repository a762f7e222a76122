use soroban_sdk::String;

use crate::errors::HealthError;

/// Upper bound for free-text fields, keeps entries cheap to store.
pub const MAX_TEXT_LENGTH: u32 = 256;

/// Required free-text fields must be non-empty and bounded.
pub fn validate_text(value: &String) -> Result<(), HealthError> {
    if value.len() == 0 || value.len() > MAX_TEXT_LENGTH {
        return Err(HealthError::InvalidInput);
    }
    Ok(())
}

/// Body measurements are required; zero is a placeholder, not a reading.
pub fn validate_measurement(value: u32) -> Result<(), HealthError> {
    if value == 0 {
        return Err(HealthError::InvalidInput);
    }
    Ok(())
}
