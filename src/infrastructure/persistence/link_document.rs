//! Stored shape of a link and its mapping to the domain record.
//!
//! # Field-name contract
//!
//! | document field | type       | domain field          |
//! |----------------|------------|-----------------------|
//! | `_id`          | `ObjectId` | `Link::id` (24 hex)   |
//! | `url`          | string     | `Link::url`           |
//! | `description`  | string     | `Link::description`   |
//!
//! `_id` is omitted on insert so the store assigns it.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;

/// A link as stored in the `links` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub url: String,
    pub description: String,
}

impl LinkDocument {
    /// Converts a stored document into a domain link.
    ///
    /// Documents read from the store always carry `_id`; `assigned` covers
    /// the insert path where the driver returns the id separately.
    pub fn into_link(self, assigned: Option<ObjectId>) -> Result<Link, AppError> {
        let id = self
            .id
            .or(assigned)
            .ok_or_else(|| AppError::internal("Stored link has no _id"))?;

        Ok(Link::new(id.to_hex(), self.url, self.description))
    }
}

impl From<NewLink> for LinkDocument {
    fn from(new_link: NewLink) -> Self {
        Self {
            id: None,
            url: new_link.url,
            description: new_link.description,
        }
    }
}

/// Parses a caller-supplied identifier into the store's id type.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] unless `id` is exactly 24 hex digits.
pub fn parse_link_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| {
        AppError::invalid_argument(format!(
            "Invalid link id '{id}': expected a 24-character hex string"
        ))
    })
}
