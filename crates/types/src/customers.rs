use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Preferred channel for reaching a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Mail,
}

impl ContactMethod {
    /// Every selectable contact method, in display order
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Mail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Mail => "Mail",
        }
    }
}

impl Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported contact method: {0}. Expected one of Email, Phone, Mail")]
pub struct ParseContactMethodError(pub String);

impl FromStr for ContactMethod {
    type Err = ParseContactMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ContactMethod::Email),
            "phone" => Ok(ContactMethod::Phone),
            "mail" => Ok(ContactMethod::Mail),
            _ => Err(ParseContactMethodError(s.to_string())),
        }
    }
}

/// A validated customer that has not been stored yet.
///
/// Optional fields are kept as empty strings rather than `None`, which is
/// also how they end up in the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}

/// A customer row as persisted, with its store-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}

impl CustomerRecord {
    pub fn from_new(id: i64, customer: NewCustomer) -> Self {
        CustomerRecord {
            id,
            name: customer.name,
            birthday: customer.birthday,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            contact_method: customer.contact_method,
        }
    }

    /// Strip the id, e.g. to compare a stored row with what was submitted
    pub fn without_id(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            birthday: self.birthday.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            contact_method: self.contact_method,
        }
    }
}
