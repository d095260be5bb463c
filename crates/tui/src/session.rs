use std::sync::OnceLock;

use uuid::Uuid;

static SESSION_ID: OnceLock<Uuid> = OnceLock::new();

/// Returns the pseudo-user identifier for this run.
///
/// Generated lazily once per process and held for its lifetime, the session
/// analogue of a browser tab. It is deliberately never persisted: every run
/// starts with a clean slate on the server side. This is a data partition
/// key, not authentication.
pub fn session_id() -> Uuid {
    *SESSION_ID.get_or_init(Uuid::new_v4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_within_a_process() {
        assert_eq!(session_id(), session_id());
        assert!(!session_id().is_nil());
    }
}
