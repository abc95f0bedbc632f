#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PermissionState {
    /// No verdict yet; the request flow has not finished.
    Pending,
    Granted,
    /// The user declined and abandoned the request flow.
    Denied,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        *self == PermissionState::Granted
    }
}

/// What the user chose in the retry/cancel dialog after a denial.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PermissionDecision {
    Retry,
    Abandon,
}
