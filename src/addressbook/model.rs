use crate::error::AddressBookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use uuid::Uuid;

pub const FIELD_COUNT: usize = 13;

/// The closed contact schema, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Company,
    MobilePhone,
    WorkPhone,
    HomePhone,
    WorkEmail,
    HomeEmail,
    Street,
    City,
    Zip,
    State,
    Country,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::FirstName,
        Field::LastName,
        Field::Company,
        Field::MobilePhone,
        Field::WorkPhone,
        Field::HomePhone,
        Field::WorkEmail,
        Field::HomeEmail,
        Field::Street,
        Field::City,
        Field::Zip,
        Field::State,
        Field::Country,
    ];

    /// Human readable label, as shown next to the editor input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Company => "Company",
            Field::MobilePhone => "Mobile Phone",
            Field::WorkPhone => "Work Phone",
            Field::HomePhone => "Home Phone",
            Field::WorkEmail => "Work Email",
            Field::HomeEmail => "Home Email",
            Field::Street => "Street",
            Field::City => "City",
            Field::Zip => "Zip",
            Field::State => "State",
            Field::Country => "Country",
        }
    }

    /// Command-line friendly name (e.g. `first-name`).
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::Company => "company",
            Field::MobilePhone => "mobile-phone",
            Field::WorkPhone => "work-phone",
            Field::HomePhone => "home-phone",
            Field::WorkEmail => "work-email",
            Field::HomeEmail => "home-email",
            Field::Street => "street",
            Field::City => "city",
            Field::Zip => "zip",
            Field::State => "state",
            Field::Country => "country",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = AddressBookError;

    /// Accepts either the key or the label, ignoring case. Spaces, dashes and
    /// underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| AddressBookError::UnknownField(s.to_string()))
    }
}

/// Opaque contact identity. Never reused once a contact is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values for one contact, always holding every schema field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields([String; FIELD_COUNT]);

impl ContactFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self[field] = value.into();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .copied()
            .zip(self.0.iter().map(String::as_str))
    }
}

impl Index<Field> for ContactFields {
    type Output = String;

    fn index(&self, field: Field) -> &String {
        &self.0[field.position()]
    }
}

impl IndexMut<Field> for ContactFields {
    fn index_mut(&mut self, field: Field) -> &mut String {
        &mut self.0[field.position()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub fields: ContactFields,
}

impl Contact {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            id: ContactId::new(),
            fields,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.fields[field]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields[field] = value.into();
    }

    /// "First Last", trimmed, for messages.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.get(Field::FirstName),
            self.get(Field::LastName)
        )
        .trim()
        .to_string()
    }
}
