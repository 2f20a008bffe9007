use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::customers::{AddressDraft, CustomerDraft},
    models::{AddressView, CustomerView},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    /// `B`, `S` or `G`; Bronze when omitted.
    pub membership: Option<String>,
}

impl From<CreateCustomerRequest> for CustomerDraft {
    fn from(req: CreateCustomerRequest) -> Self {
        CustomerDraft {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            birth_date: req.birth_date,
            membership: req.membership,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAddressRequest {
    pub street: String,
    pub city: String,
    pub zip: Option<i32>,
}

impl From<CreateAddressRequest> for AddressDraft {
    fn from(req: CreateAddressRequest) -> Self {
        AddressDraft {
            street: req.street,
            city: req.city,
            zip: req.zip,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMembershipRequest {
    pub membership: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerList {
    pub items: Vec<CustomerView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddressList {
    pub items: Vec<AddressView>,
}
