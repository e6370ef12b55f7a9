//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs provide type safety and prevent accidental
//! mixing of different identifier types. The public-facing record code
//! (`IssuedCode`) lives here as well: unlike the UUID identifiers it is a
//! short human-readable string handed to visitors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Registration domain identifiers
define_id!(VisitId, "VIS");
define_id!(ReservationId, "RSV");

// Reporting domain identifiers
define_id!(ReportId, "RPT");

// Pricing domain identifiers
define_id!(PriceId, "PRC");

// Staff/account identifiers
define_id!(StaffId, "STF");

/// Alphabet for issued code suffixes: uppercase letters and digits
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed length of the random suffix in an issued code
pub const CODE_SUFFIX_LEN: usize = 6;

/// Public-facing record code: a fixed prefix plus a 6-character suffix
/// drawn from uppercase letters and digits
///
/// Codes are unique within their record collection at issuance time and
/// are never reissued, even after the owning record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuedCode(String);

impl IssuedCode {
    /// Assembles a code from its prefix and suffix
    ///
    /// Intended for the code issuer; the suffix must already be drawn from
    /// [`CODE_ALPHABET`] with length [`CODE_SUFFIX_LEN`].
    pub fn from_parts(prefix: &str, suffix: &str) -> Self {
        debug_assert_eq!(suffix.len(), CODE_SUFFIX_LEN);
        debug_assert!(suffix.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        Self(format!("{prefix}{suffix}"))
    }

    /// Parses and validates a code string against the expected prefix
    pub fn parse(code: &str, prefix: &str) -> Result<Self, CoreError> {
        let suffix = code.strip_prefix(prefix).ok_or_else(|| {
            CoreError::validation(format!("code '{code}' does not start with '{prefix}'"))
        })?;
        if suffix.len() != CODE_SUFFIX_LEN {
            return Err(CoreError::validation(format!(
                "code suffix must be {CODE_SUFFIX_LEN} characters, got {}",
                suffix.len()
            )));
        }
        if !suffix.bytes().all(|b| CODE_ALPHABET.contains(&b)) {
            return Err(CoreError::validation(
                "code suffix must be uppercase letters or digits",
            ));
        }
        Ok(Self(code.to_string()))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssuedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IssuedCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
