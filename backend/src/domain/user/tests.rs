//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn ana() -> User {
    User::new(
        UserId::new(VALID_ID).expect("valid id"),
        "Ana",
        "ana@x.com",
        Some(30),
    )
}

#[rstest]
#[case("")]
#[case("not-a-uuid")]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
fn user_id_rejects_invalid_input(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
}

#[rstest]
fn user_id_parses_via_from_str() {
    let id: UserId = VALID_ID.parse().expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
fn user_serialises_all_fields(ana: User) {
    let value = serde_json::to_value(&ana).expect("serialise user");
    assert_eq!(
        value,
        json!({"id": VALID_ID, "name": "Ana", "email": "ana@x.com", "age": 30})
    );
}

#[rstest]
fn user_serialises_missing_age_as_null() {
    let user = User::new(UserId::random(), "Bia", "bia@x.com", None);
    let value = serde_json::to_value(&user).expect("serialise user");
    assert!(value.get("age").is_some_and(serde_json::Value::is_null));
}

#[rstest]
#[case(None, Some("ana@x.com"), UserValidationError::MissingName)]
#[case(Some(""), Some("ana@x.com"), UserValidationError::MissingName)]
#[case(Some("  "), Some("ana@x.com"), UserValidationError::MissingName)]
#[case(Some("Ana"), None, UserValidationError::MissingEmail)]
#[case(Some("Ana"), Some(""), UserValidationError::MissingEmail)]
#[case(None, None, UserValidationError::MissingName)]
fn new_user_requires_name_and_email(
    #[case] name: Option<&str>,
    #[case] email: Option<&str>,
    #[case] expected: UserValidationError,
) {
    let result = NewUser::try_from_parts(name.map(str::to_owned), email.map(str::to_owned), None);
    assert_eq!(result, Err(expected));
}

#[rstest]
fn new_user_into_user_keeps_fields() {
    let new_user = NewUser::try_from_parts(Some("Ana".into()), Some("ana@x.com".into()), None)
        .expect("valid payload");
    let id = UserId::random();
    let user = new_user.into_user(id);
    assert_eq!(user.id(), &id);
    assert_eq!(user.name(), "Ana");
    assert_eq!(user.email(), "ana@x.com");
    assert_eq!(user.age(), None);
}

#[rstest]
fn apply_only_touches_present_fields(mut ana: User) {
    ana.apply(&UserChanges {
        email: Some("ana@y.com".into()),
        ..UserChanges::default()
    });
    assert_eq!(ana.name(), "Ana");
    assert_eq!(ana.email(), "ana@y.com");
    assert_eq!(ana.age(), Some(30));
}

#[rstest]
fn apply_clears_age_when_explicitly_null(mut ana: User) {
    ana.apply(&UserChanges {
        age: Some(None),
        ..UserChanges::default()
    });
    assert_eq!(ana.age(), None);
}

#[rstest]
fn empty_changes_report_empty() {
    assert!(UserChanges::default().is_empty());
    assert!(
        !UserChanges {
            age: Some(None),
            ..UserChanges::default()
        }
        .is_empty()
    );
}
