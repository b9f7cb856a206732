//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `email` carries a unique constraint and both `name`
    /// and `email` are checked to be non-blank.
    users (id) {
        /// Primary key generated by `gen_random_uuid()`.
        id -> Uuid,
        name -> Text,
        email -> Text,
        age -> Nullable<Int4>,
        /// Insertion timestamp used to order listings.
        created_at -> Timestamptz,
    }
}
