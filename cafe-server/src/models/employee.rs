//! Employee entity and projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::AppResult;
use crate::utils::time::validate_not_future;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_email, validate_phone, validate_required_text,
};

/// Employee gender - invalid values are rejected at deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// An employee record
///
/// `id` has the form `UI` + 7 alphanumerics (≥1 digit), assigned by the
/// server on creation and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    /// Optional reference to a cafe; the admin UI submits "" for unassigned
    #[serde(default, deserialize_with = "super::uuid_or_empty")]
    pub cafe_id: Option<Uuid>,
    #[serde(default)]
    pub employment_date: Option<NaiveDate>,
}

impl Employee {
    /// Validate field rules for a full record (used on replace)
    pub fn validate(&self) -> AppResult<()> {
        validate_employee_fields(
            &self.name,
            &self.email_address,
            &self.phone_number,
            self.employment_date,
        )
    }
}

/// Creation payload - the server assigns the id
///
/// Serialize is needed because the duplicate-email conflict envelope echoes
/// the submitted payload back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    #[serde(default, deserialize_with = "super::uuid_or_empty")]
    pub cafe_id: Option<Uuid>,
    #[serde(default)]
    pub employment_date: Option<NaiveDate>,
}

impl EmployeeCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_employee_fields(
            &self.name,
            &self.email_address,
            &self.phone_number,
            self.employment_date,
        )
    }

    /// Materialize the record with a server-assigned id
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            gender: self.gender,
            cafe_id: self.cafe_id,
            employment_date: self.employment_date,
        }
    }
}

fn validate_employee_fields(
    name: &str,
    email: &str,
    phone: &str,
    employment_date: Option<NaiveDate>,
) -> AppResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_email(email, "emailAddress")?;
    validate_phone(phone, "phoneNumber")?;
    if let Some(date) = employment_date {
        validate_not_future(date, "employmentDate")?;
    }
    Ok(())
}

/// Listing projection: employee plus derived cafe name and days worked
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithCafeDetails {
    #[serde(flatten)]
    pub employee: Employee,
    /// Name of the referenced cafe, or "" when unset/unmatched
    pub cafe_name: String,
    /// Whole days since the employment date in the business time zone
    pub days_worked: i64,
}
