//! Fail-fast engine errors.
//!
//! Absence of a match is never an error here: a rule list that stops
//! matching simply returns control (and the cursor) to its caller. The only
//! hard failures are a misconfigured scan and captured tokens that refuse to
//! convert to their field's type. Both abort the whole `apply` call; no
//! partial or coerced value is ever substituted.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The again-fallback was configured as `Again`, which would retry a
    /// failed match forever.
    #[error("scan misconfigured: again_fallback must not be Again")]
    AgainFallback,

    /// A handler asked for a named capture group its own pattern does not
    /// guarantee. Programming error in the rule set.
    #[error("rule pattern has no capture group `{name}`")]
    MissingCapture { name: &'static str },

    /// An integer-looking token failed to parse.
    #[error("invalid integer in capture `{name}`")]
    BadInt {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },

    /// A float-looking token failed to parse.
    #[error("invalid number in capture `{name}`")]
    BadFloat {
        name: &'static str,
        #[source]
        source: ParseFloatError,
    },

    /// A hex byte blob (EDID/GUID) had a non-hex digit or odd length.
    #[error("invalid hex blob in capture `{name}`")]
    BadHexBlob { name: &'static str },
}
