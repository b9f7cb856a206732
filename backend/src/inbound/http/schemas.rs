//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON shape of their domain counterparts and are
//! registered with utoipa under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Identifier assigned at creation.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Display name.
    #[schema(example = "Ana")]
    name: String,
    /// Unique email address.
    #[schema(example = "ana@x.com")]
    email: String,
    /// Optional age; `null` when unknown.
    #[schema(example = 30)]
    age: Option<i32>,
}
