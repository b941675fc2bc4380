//! UUID-based ID types for components of the backing topology model.
//!
//! Each ID type wraps a `Uuid` to prevent cross-type confusion.
//! A `BusId` cannot be accidentally used where a `ComponentId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new ID from a `Uuid`.
            pub fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create a fresh random ID.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the inner `Uuid`.
            pub fn inner(self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_id!(
    /// Backing topology component (line, transformer, bus, ...) an asset maps to.
    ComponentId
);

define_id!(
    /// Bus an asset connects to.
    BusId
);
