//! Shop Settings Entity
//!
//! A single record holding the owners, staff and address shown on the
//! storefront's contact page.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Owner or staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Public photo URL
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    pub owners: Vec<Person>,
    pub staff_list: Vec<Person>,
    pub address: String,
}

/// Which list an uploaded profile photo belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlot {
    Owner(usize),
    Staff(usize),
}

impl PhotoSlot {
    /// `ownerPhoto_<i>` / `staffPhoto_<i>`; anything else is not a slot
    pub fn from_field_name(name: &str) -> Option<Self> {
        if let Some(index) = name.strip_prefix("ownerPhoto_") {
            return index.parse().ok().map(PhotoSlot::Owner);
        }
        if let Some(index) = name.strip_prefix("staffPhoto_") {
            return index.parse().ok().map(PhotoSlot::Staff);
        }
        None
    }
}

impl ShopSettings {
    /// Build from the submitted form; `owners`/`staffList` default to `[]`
    pub fn parse(owners: &str, staff_list: &str, address: &str) -> CatalogResult<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(CatalogError::Validation("address is required".to_string()));
        }

        let settings = Self {
            owners: parse_people("owners", owners)?,
            staff_list: parse_people("staffList", staff_list)?,
            address: address.to_string(),
        };
        Ok(settings)
    }

    /// The entry a photo slot refers to, if the index is in range
    pub fn person_mut(&mut self, slot: PhotoSlot) -> Option<&mut Person> {
        match slot {
            PhotoSlot::Owner(i) => self.owners.get_mut(i),
            PhotoSlot::Staff(i) => self.staff_list.get_mut(i),
        }
    }
}

fn parse_people(field: &str, raw: &str) -> CatalogResult<Vec<Person>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let people: Vec<Person> = serde_json::from_str(raw).map_err(|_| {
        CatalogError::Validation(format!("{} must be a JSON array of {{name, phone}}", field))
    })?;
    for person in &people {
        if person.name.trim().is_empty() || person.phone.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "every entry in {} needs a name and phone",
                field
            )));
        }
    }
    Ok(people)
}
