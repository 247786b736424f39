//! GraphQL API exposure
//!
//! Serves the roster schema over HTTP: the query/mutation endpoint, an
//! optional playground UI and the SDL export. Resolver logic lives in
//! [`schema`].

pub mod schema;

use crate::server::host::ServerHost;
use anyhow::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::Extension,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;

pub use schema::{MutationRoot, QueryRoot, RosterSchema, build_schema};

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Routes are mounted under `config.graphql_path`:
    /// - `GET {path}` / `POST {path}`: query and mutation endpoint
    /// - `GET {path}/schema`: SDL export
    /// - `GET {path}/playground`: playground UI, when enabled
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let schema = build_schema(host.roster.clone());
        let config = host.config.clone();

        let mut router = Router::new()
            .route(&config.graphql_path, get(graphql_handler).post(graphql_handler))
            .route(&config.schema_path(), get(graphql_sdl));

        if config.playground {
            router = router.route(&config.playground_path(), get(graphql_playground));
        }

        Ok(router.layer(Extension(schema)).layer(Extension(host)))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<RosterSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for the GraphQL playground UI
async fn graphql_playground(Extension(host): Extension<Arc<ServerHost>>) -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(
        &host.config.graphql_path,
    )))
}

/// Handler for the schema SDL export
async fn graphql_sdl(Extension(schema): Extension<RosterSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
