//! GraphQL output types.

use async_graphql::SimpleObject;

use crate::domain::entities::Link;

/// A link as exposed over GraphQL (`type Link`).
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Link")]
pub struct LinkObject {
    pub id: String,
    pub url: String,
    pub description: String,
}

impl From<Link> for LinkObject {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            description: link.description,
        }
    }
}
