use crate::model::ContactId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("No contact selected")]
    NoSelection,

    #[error("No contact at index {0}")]
    InvalidIndex(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
