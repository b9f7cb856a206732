//! Domain primitives, ports and services.
//!
//! Purpose: define the user entity, the transport-agnostic error taxonomy,
//! and the use-case service that sits between inbound adapters and the
//! persistence gateway. Nothing in this module depends on Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: failure envelope surfaced to adapters.
//! - User, UserId, NewUser, UserChanges: the user aggregate and its payloads.
//! - UsersService: implements the driving ports over a `UserRepository`.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserChanges, UserId, UserValidationError};
pub use self::users_service::{DUPLICATE_EMAIL_MESSAGE, UsersService};
