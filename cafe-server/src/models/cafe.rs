//! Cafe entity and projections

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_LOCATION_LEN, MAX_NAME_LEN, validate_required_text,
};

/// A cafe location record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    /// Unique identifier, immutable after creation
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    /// URL or embedded data-URI; no server-side length cap
    #[serde(default)]
    pub logo: String,
}

impl Cafe {
    /// Validate field rules for a full record (used on replace)
    pub fn validate(&self) -> AppResult<()> {
        validate_cafe_fields(&self.name, &self.description, &self.location)
    }
}

/// Creation payload - the server assigns the id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeCreate {
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub logo: String,
}

impl CafeCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_cafe_fields(&self.name, &self.description, &self.location)
    }

    /// Materialize the record with a server-assigned id
    pub fn into_cafe(self, id: Uuid) -> Cafe {
        Cafe {
            id,
            name: self.name,
            description: self.description,
            location: self.location,
            logo: self.logo,
        }
    }
}

fn validate_cafe_fields(name: &str, description: &str, location: &str) -> AppResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(description, "description", MAX_DESCRIPTION_LEN)?;
    validate_required_text(location, "location", MAX_LOCATION_LEN)?;
    Ok(())
}

/// Listing projection: cafe plus its derived employee count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeWithEmployeeCount {
    #[serde(flatten)]
    pub cafe: Cafe,
    pub employee_count: usize,
}
