//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user routes, the health probes and the schema
//! wrappers that describe domain types without coupling them to utoipa. The
//! document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::users::{CreateUserRequest, DeleteUserResponse, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Create, list, update and delete users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorBody,
        CreateUserRequest,
        UpdateUserRequest,
        DeleteUserResponse
    )),
    tags(
        (name = "users", description = "User registration and maintenance"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
