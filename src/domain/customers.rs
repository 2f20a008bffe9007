use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::ToSchema;

use super::{ValidationError, require_text};

const NAME_MAX_LEN: usize = 150;
const FIELD_MAX_LEN: usize = 255;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumString, AsRefStr,
)]
pub enum Membership {
    #[default]
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    Bronze,
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    Silver,
    #[serde(rename = "G")]
    #[strum(serialize = "G")]
    Gold,
}

impl Membership {
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        Membership::from_str(code).map_err(|_| {
            ValidationError::new(
                "membership",
                format!("\"{code}\" is not a valid choice (B, S or G)"),
            )
        })
    }

    pub fn code(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Membership::Bronze => "Bronze",
            Membership::Silver => "Silver",
            Membership::Gold => "Gold",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
}

impl CustomerDraft {
    pub fn validate(self) -> Result<ValidCustomer, ValidationError> {
        let email = require_text("email", &self.email, FIELD_MAX_LEN)?;
        if !email.contains('@') {
            return Err(ValidationError::new("email", "must be a valid email address"));
        }
        let membership = match self.membership.as_deref() {
            Some(code) => Membership::parse(code)?,
            None => Membership::default(),
        };
        Ok(ValidCustomer {
            first_name: require_text("first_name", &self.first_name, NAME_MAX_LEN)?,
            last_name: require_text("last_name", &self.last_name, NAME_MAX_LEN)?,
            email,
            phone: require_text("phone", &self.phone, FIELD_MAX_LEN)?,
            birth_date: self.birth_date,
            membership,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub zip: Option<i32>,
}

impl AddressDraft {
    pub fn validate(self) -> Result<AddressDraft, ValidationError> {
        Ok(AddressDraft {
            street: require_text("street", &self.street, FIELD_MAX_LEN)?,
            city: require_text("city", &self.city, FIELD_MAX_LEN)?,
            zip: self.zip,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_codes() {
        assert_eq!(Membership::parse("G").unwrap(), Membership::Gold);
        assert_eq!(Membership::Silver.code(), "S");
        assert_eq!(Membership::default(), Membership::Bronze);
        let err = Membership::parse("X").unwrap_err();
        assert_eq!(err.field, "membership");
    }

    #[test]
    fn customer_defaults_to_bronze() {
        let customer = CustomerDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            birth_date: None,
            membership: None,
        }
        .validate()
        .unwrap();
        assert_eq!(customer.membership, Membership::Bronze);
    }
}
