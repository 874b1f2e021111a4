use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// One progression state per gang; the gang itself lives in the host server.
define_id!(GangId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gang_id_roundtrip() {
        let id = GangId::new();
        let uuid = id.to_uuid();
        assert_eq!(GangId::from_uuid(uuid), id);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_gang_id_serde() {
        let id = GangId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: GangId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }
}
