//! Schema assembly: binds the resolver roots to a link repository.

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Schema};

use super::{Mutation, Query};
use crate::domain::repositories::LinkRepository;

/// The complete GraphQL schema.
pub type LinkSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the executable schema over `links`.
///
/// Both roots share the same repository handle; nothing else is stored in
/// the schema context.
pub fn build_schema(links: Arc<dyn LinkRepository>) -> LinkSchema {
    Schema::build(
        Query::new(links.clone()),
        Mutation::new(links),
        EmptySubscription,
    )
    .extension(Tracing)
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Link, NewLink};
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;
    use async_graphql::Request;
    use mockall::predicate::eq;
    use serde_json::json;

    const ID: &str = "5f1d7a3c9b1e8a0012345678";

    fn sample_link() -> Link {
        Link::new(
            ID.to_string(),
            "https://howtographql.com".to_string(),
            "Your favorite GraphQL page".to_string(),
        )
    }

    fn schema_with(mock: MockLinkRepository) -> LinkSchema {
        build_schema(Arc::new(mock))
    }

    #[test]
    fn test_sdl_declares_link_contract() {
        let sdl = schema_with(MockLinkRepository::new()).sdl();

        assert!(sdl.contains("type Link"));
        assert!(sdl.contains("id: String!"));
        assert!(sdl.contains("url: String!"));
        assert!(sdl.contains("description: String!"));
        assert!(sdl.contains("allLinks: [Link!]!"));
        assert!(sdl.contains("link(id: String!): Link"));
        assert!(sdl.contains("createLink(url: String!, description: String!): Link!"));
    }

    #[tokio::test]
    async fn test_all_links_delegates_to_repository() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![sample_link()]));

        let response = schema_with(mock)
            .execute("{ allLinks { id url description } }")
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "allLinks": [{
                "id": ID,
                "url": "https://howtographql.com",
                "description": "Your favorite GraphQL page",
            }]})
        );
    }

    #[tokio::test]
    async fn test_link_passes_id_through() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_id()
            .with(eq(ID))
            .times(1)
            .returning(|_| Ok(Some(sample_link())));

        let response = schema_with(mock)
            .execute(format!(r#"{{ link(id: "{ID}") {{ id url }} }}"#))
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "link": { "id": ID, "url": "https://howtographql.com" } })
        );
    }

    #[tokio::test]
    async fn test_link_not_found_is_null() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));

        let response = schema_with(mock)
            .execute(format!(r#"{{ link(id: "{ID}") {{ id }} }}"#))
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(response.data.into_json().unwrap(), json!({ "link": null }));
    }

    #[tokio::test]
    async fn test_repository_error_surfaces_with_code() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_id()
            .returning(|_| Err(AppError::invalid_argument("Invalid link id 'nope'")));

        let response = schema_with(mock)
            .execute(r#"{ link(id: "nope") { id } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["message"], "Invalid link id 'nope'");
        assert_eq!(error["extensions"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_connectivity_error_is_not_translated() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_all()
            .returning(|| Err(AppError::connectivity("Store unreachable")));

        let response = schema_with(mock).execute("{ allLinks { id } }").await;

        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "CONNECTIVITY_ERROR");
    }

    #[tokio::test]
    async fn test_create_link_delegates_with_variables() {
        let mut mock = MockLinkRepository::new();
        mock.expect_create()
            .with(eq(NewLink::new(
                "https://graphql.org/learn/",
                "The official docs",
            )))
            .times(1)
            .returning(|new_link| Ok(Link::new(ID.to_string(), new_link.url, new_link.description)));

        let request = Request::new(
            "mutation Create($url: String!, $description: String!) { \
               createLink(url: $url, description: $description) { id url description } }",
        )
        .variables(async_graphql::Variables::from_json(json!({
            "url": "https://graphql.org/learn/",
            "description": "The official docs",
        })));

        let response = schema_with(mock).execute(request).await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "createLink": {
                "id": ID,
                "url": "https://graphql.org/learn/",
                "description": "The official docs",
            }})
        );
    }
}
