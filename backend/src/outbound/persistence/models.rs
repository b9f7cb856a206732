//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;
use crate::domain::{NewUser, User, UserChanges, UserId};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    #[expect(dead_code, reason = "audit column read with the row but not exposed to the domain")]
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::from_uuid(row.id), row.name, row.email, row.age)
    }
}

/// Insertable struct for new user records. `id` and `created_at` are
/// generated by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: Option<i32>,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: user.name(),
            email: user.email(),
            age: user.age(),
        }
    }
}

/// Changeset for partial updates.
///
/// `None` fields are skipped; `age: Some(None)` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub age: Option<Option<i32>>,
}

impl<'a> From<&'a UserChanges> for UserChangeset<'a> {
    fn from(changes: &'a UserChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            email: changes.email.as_deref(),
            age: changes.age,
        }
    }
}
