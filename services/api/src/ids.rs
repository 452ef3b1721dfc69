//! Opaque identifier generation

use std::sync::Arc;

use uuid::Uuid;

/// Source of opaque identifiers for entities and session tokens
pub trait IdGenerator: Send + Sync {
    /// Mint a fresh identifier
    fn generate(&self) -> String;
}

/// UUIDv4-backed generator used by the running service
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Shared handle handed to repositories and the session manager
pub type SharedIdGenerator = Arc<dyn IdGenerator>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_distinct_parseable_uuids() {
        let ids = UuidGenerator;
        let first = ids.generate();
        let second = ids.generate();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
        assert!(Uuid::parse_str(&second).is_ok());
    }
}
