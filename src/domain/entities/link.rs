//! Link entity, the single record type served by the API.

/// A stored link.
///
/// `id` is assigned by the store on creation and is opaque to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub description: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: String, url: String, description: String) -> Self {
        Self {
            id,
            url,
            description,
        }
    }
}

/// Input data for creating a new link.
///
/// Neither field is validated; the store accepts whatever is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub description: String,
}

impl NewLink {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}
