//! Tests for the user service error mapping.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{FixtureUserRepository, MockUserRepository};
use rstest::rstest;

fn new_user(name: &str, email: &str, age: Option<i32>) -> NewUser {
    NewUser::try_from_parts(Some(name.to_owned()), Some(email.to_owned()), age)
        .expect("valid new user")
}

fn mock_service(repo: MockUserRepository) -> UsersService<MockUserRepository> {
    UsersService::new(Arc::new(repo))
}

#[tokio::test]
async fn create_returns_stored_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|user| Ok(user.clone().into_user(UserId::random())));

    let created = mock_service(repo)
        .create_user(new_user("Ana", "ana@x.com", Some(30)))
        .await
        .expect("create succeeds");

    assert_eq!(created.name(), "Ana");
    assert_eq!(created.email(), "ana@x.com");
    assert_eq!(created.age(), Some(30));
}

#[tokio::test]
async fn create_maps_duplicate_email_to_conflict() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|_| Err(UserPersistenceError::duplicate_email()));

    let err = mock_service(repo)
        .create_user(new_user("Ana", "ana@x.com", None))
        .await
        .expect_err("conflict");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), DUPLICATE_EMAIL_MESSAGE);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"))]
#[case(UserPersistenceError::query("syntax"))]
#[tokio::test]
async fn create_maps_other_failures_to_internal(#[case] failure: UserPersistenceError) {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(move |_| Err(failure));

    let err = mock_service(repo)
        .create_user(new_user("Ana", "ana@x.com", None))
        .await
        .expect_err("internal");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(UserPersistenceError::not_found("3fa85f64-5717-4562-b3fc-2c963f66afa6"))]
#[case(UserPersistenceError::duplicate_email())]
#[case(UserPersistenceError::connection("refused"))]
#[tokio::test]
async fn update_maps_every_failure_to_internal(#[case] failure: UserPersistenceError) {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(move |_, _| Err(failure));

    let err = mock_service(repo)
        .update_user(&UserId::random(), UserChanges::default())
        .await
        .expect_err("internal");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(UserPersistenceError::not_found("3fa85f64-5717-4562-b3fc-2c963f66afa6"))]
#[case(UserPersistenceError::query("locked"))]
#[tokio::test]
async fn delete_maps_every_failure_to_internal(#[case] failure: UserPersistenceError) {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(move |_| Err(failure));

    let err = mock_service(repo)
        .delete_user(&UserId::random())
        .await
        .expect_err("internal");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn list_maps_failure_to_internal() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .returning(|| Err(UserPersistenceError::connection("pool exhausted")));

    let err = mock_service(repo).list_users().await.expect_err("internal");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn duplicate_create_leaves_first_user_unchanged() {
    let service = UsersService::new(Arc::new(FixtureUserRepository::new()));
    let first = service
        .create_user(new_user("Ana", "ana@x.com", Some(30)))
        .await
        .expect("first create");

    let err = service
        .create_user(new_user("Ana Clone", "ana@x.com", Some(31)))
        .await
        .expect_err("duplicate");
    assert_eq!(err.code(), ErrorCode::Conflict);

    let users = service.list_users().await.expect("list");
    assert_eq!(users, vec![first]);
}

#[tokio::test]
async fn deleted_user_is_absent_from_list() {
    let service = UsersService::new(Arc::new(FixtureUserRepository::new()));
    let ana = service
        .create_user(new_user("Ana", "ana@x.com", None))
        .await
        .expect("create");
    assert!(!ana.id().to_string().is_empty());
    assert_eq!(service.list_users().await.expect("list"), vec![ana.clone()]);

    service.delete_user(ana.id()).await.expect("delete");
    assert!(service.list_users().await.expect("list").is_empty());
}
