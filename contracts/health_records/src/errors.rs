use soroban_sdk::contracttype;

/// Error categories for classifying failures when monitoring events.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid input parameters or format errors
    Validation = 1,
    /// Role and consent precondition failures
    Authorization = 2,
    /// Resource lookup failures
    NotFound = 3,
    /// Duplicate registrations or duplicate live consents
    StateConflict = 4,
}

/// Severity levels indicating the impact of an error.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum HealthError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    DoctorNotFound = 4,
    AppointmentNotFound = 5,
    DoctorAlreadyRegistered = 6,
    ConsentAlreadyActive = 7,
    InvalidInput = 8,
}

impl HealthError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            HealthError::NotInitialized
            | HealthError::AlreadyInitialized
            | HealthError::InvalidInput => ErrorCategory::Validation,
            HealthError::Unauthorized => ErrorCategory::Authorization,
            HealthError::DoctorNotFound | HealthError::AppointmentNotFound => {
                ErrorCategory::NotFound
            }
            HealthError::DoctorAlreadyRegistered | HealthError::ConsentAlreadyActive => {
                ErrorCategory::StateConflict
            }
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HealthError::InvalidInput
            | HealthError::DoctorNotFound
            | HealthError::AppointmentNotFound => ErrorSeverity::Low,
            HealthError::AlreadyInitialized
            | HealthError::DoctorAlreadyRegistered
            | HealthError::ConsentAlreadyActive => ErrorSeverity::Medium,
            HealthError::NotInitialized | HealthError::Unauthorized => ErrorSeverity::High,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            HealthError::NotInitialized => "Contract has not been initialized",
            HealthError::AlreadyInitialized => "Contract is already initialized",
            HealthError::Unauthorized => "Caller is not authorized for this operation",
            HealthError::DoctorNotFound => "Doctor not found in the registry",
            HealthError::AppointmentNotFound => "No appointment exists for this pair",
            HealthError::DoctorAlreadyRegistered => "Doctor is already registered",
            HealthError::ConsentAlreadyActive => "A live consent already exists for this pair",
            HealthError::InvalidInput => "Invalid input parameters provided",
        }
    }
}
