//! Users API handlers.
//!
//! ```text
//! GET /usuarios
//! POST /usuarios {"name":"Ana","email":"ana@x.com","age":30}
//! PUT /usuarios/{id} {"age":31}
//! DELETE /usuarios/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Message returned when `name` or `email` is missing on create.
pub const MISSING_FIELDS_MESSAGE: &str = "Nome e email são obrigatórios.";

/// Confirmation message returned by a successful delete.
pub const USER_DELETED_MESSAGE: &str = "Usuário deletado com sucesso!";

/// Request body for `POST /usuarios`.
///
/// `name` and `email` are read as raw JSON so that `null`, `false`, `0` and
/// `""` all count as a missing field rather than a malformed body.
///
/// Example JSON: `{"name":"Ana","email":"ana@x.com","age":30}`
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(value_type = Option<String>, example = "Ana")]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>, example = "ana@x.com")]
    pub email: Option<Value>,
    #[schema(example = 30)]
    pub age: Option<i32>,
}

/// A required text field as submitted on create.
#[derive(Debug, PartialEq, Eq)]
enum RequiredText {
    Missing,
    Text(String),
    WrongType,
}

impl From<Option<Value>> for RequiredText {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Self::Missing,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Self::Missing,
            Some(Value::String(s)) if s.is_empty() => Self::Missing,
            Some(Value::String(s)) => Self::Text(s),
            Some(_) => Self::WrongType,
        }
    }
}

impl CreateUserRequest {
    /// Validate the payload into a [`NewUser`].
    ///
    /// Missing or blank `name`/`email` is an invalid request. Any other
    /// non-string value for those fields is an internal error.
    fn into_new_user(self) -> Result<NewUser, Error> {
        let name = RequiredText::from(self.name);
        let email = RequiredText::from(self.email);
        if name == RequiredText::Missing || email == RequiredText::Missing {
            return Err(Error::invalid_request(MISSING_FIELDS_MESSAGE));
        }
        let (RequiredText::Text(name), RequiredText::Text(email)) = (name, email) else {
            return Err(Error::internal("name and email must be strings"));
        };
        NewUser::try_from_parts(Some(name), Some(email), self.age).map_err(|err| {
            debug!(error = %err, "rejected create request");
            Error::invalid_request(MISSING_FIELDS_MESSAGE)
        })
    }
}

/// Request body for `PUT /usuarios/{id}`.
///
/// Every field is optional. An explicit `"age": null` clears the age while
/// an absent `age` leaves it untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "Ana Maria")]
    pub name: Option<String>,
    #[schema(example = "ana.maria@x.com")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>, example = 31)]
    pub age: Option<Option<i32>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            age: value.age,
        }
    }
}

/// Response body for `DELETE /usuarios/{id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "Usuário deletado com sucesso!")]
    pub message: String,
}

// Malformed identifiers surface as internal errors, the same as any other
// failure on these routes.
fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| Error::internal(format!("invalid user id {raw:?}: {err}")))
}

/// List every registered user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/usuarios")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Missing name or email", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 500, description = "Unreadable body or any other failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/usuarios")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = payload.into_inner().into_new_user()?;
    let created = state.users_command.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Apply a partial update to a user.
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 500, description = "Unknown user or any other failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/usuarios/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner())?;
    let updated = state
        .users_command
        .update_user(&id, payload.into_inner().into())
        .await?;
    Ok(web::Json(updated))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 500, description = "Unknown user or any other failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/usuarios/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = parse_user_id(&path.into_inner())?;
    state.users_command.delete_user(&id).await?;
    Ok(web::Json(DeleteUserResponse {
        message: USER_DELETED_MESSAGE.to_owned(),
    }))
}
