//! User aggregate and the payloads used to create and modify it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifier is not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// Name is absent or blank.
    #[error("name is required")]
    MissingName,
    /// Email is absent or blank.
    #[error("email is required")]
    MissingEmail,
}

/// Stable user identifier generated by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a [`UserId`] from its textual form.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("42").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Registered user.
///
/// ## Invariants
/// - `name` and `email` are non-empty; storage rejects blank values.
/// - `email` is unique across users; storage enforces it.
///
/// Serialises as `{"id", "name", "email", "age"}` with `age` rendered as
/// `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: Option<i32>,
}

impl User {
    /// Assemble a user from stored components.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: Option<i32>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name supplied at creation or last update.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Optional age.
    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// Apply a partial update in place.
    ///
    /// Absent fields keep their value; `age: Some(None)` clears the age.
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
    }
}

/// Validated payload for creating a user.
///
/// # Examples
/// ```
/// use user_registry::domain::{NewUser, UserValidationError};
///
/// let user = NewUser::try_from_parts(Some("Ana".into()), Some("ana@x.com".into()), Some(30))
///     .expect("valid payload");
/// assert_eq!(user.name(), "Ana");
///
/// let missing = NewUser::try_from_parts(Some("Ana".into()), None, None);
/// assert_eq!(missing, Err(UserValidationError::MissingEmail));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    age: Option<i32>,
}

impl NewUser {
    /// Validate raw inputs. `name` is checked before `email`.
    pub fn try_from_parts(
        name: Option<String>,
        email: Option<String>,
        age: Option<i32>,
    ) -> Result<Self, UserValidationError> {
        let name = name
            .filter(|value| !value.trim().is_empty())
            .ok_or(UserValidationError::MissingName)?;
        let email = email
            .filter(|value| !value.trim().is_empty())
            .ok_or(UserValidationError::MissingEmail)?;
        Ok(Self { name, email, age })
    }

    /// Name to store.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email to store.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Optional age to store.
    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// Materialise the user once storage has assigned an identifier.
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name, self.email, self.age)
    }
}

/// Partial update forwarded verbatim to storage.
///
/// No field is validated here; storage decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement age; `Some(None)` clears it.
    pub age: Option<Option<i32>>,
}

impl UserChanges {
    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests;
