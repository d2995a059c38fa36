//! Correlation identifiers for log tracking.
//!
//! Both ids are UUID v7, so they sort by creation time in log aggregators.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_v7_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh id
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Parse from the hyphenated string form
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
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
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_v7_id! {
    /// Assigned to each accepted submission and carried through the sink.
    SubmissionId
}

uuid_v7_id! {
    /// Assigned to each HTTP request by the tracing middleware and echoed
    /// in the `x-request-id` response header.
    RequestId
}
