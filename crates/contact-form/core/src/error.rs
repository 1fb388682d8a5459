// File: contact-form/core/src/error.rs
// Purpose: Fatal and parse errors (validation failures live in rules.rs)

use thiserror::Error;

/// The host page does not satisfy the markup contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("required element {locator} is missing from the page")]
    MissingElement { locator: String },

    #[error("no document is available")]
    NoDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);
