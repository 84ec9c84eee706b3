//! Unit tests for the refresh token lifecycle service

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{
    MockTokenRepository, MockUserRepository, TokenRepository, UserRepository,
};
use crate::services::token::RefreshTokenService;

fn lifetime() -> Duration {
    Duration::days(REFRESH_TOKEN_EXPIRY_DAYS)
}

struct TestContext {
    tokens: Arc<MockTokenRepository>,
    users: Arc<MockUserRepository>,
    service: RefreshTokenService<MockTokenRepository, MockUserRepository>,
}

fn create_test_context() -> TestContext {
    let tokens = Arc::new(MockTokenRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let service = RefreshTokenService::new(Arc::clone(&tokens), Arc::clone(&users));

    TestContext {
        tokens,
        users,
        service,
    }
}

async fn create_test_user(ctx: &TestContext) -> User {
    ctx.users
        .create(User::new(
            "user@example.com".to_string(),
            "$2b$10$hash".to_string(),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_persists_an_active_row() {
    let ctx = create_test_context();
    let user_id = Uuid::new_v4();

    let token = ctx.service.create(user_id, lifetime()).await.unwrap();

    assert_eq!(token.token.len(), 64);
    assert_eq!(token.user_id, user_id);
    assert_eq!(token.created_at, token.updated_at);
    assert!(token.revoked_at.is_none());
    assert!(token.expires_at > Utc::now() + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS - 1));

    let found = ctx.service.lookup(&token.token).await.unwrap();
    assert_eq!(found, token);
}

#[tokio::test]
async fn test_create_honors_caller_lifetime() {
    let ctx = create_test_context();

    let token = ctx
        .service
        .create(Uuid::new_v4(), Duration::days(1))
        .await
        .unwrap();

    assert!(token.expires_at <= Utc::now() + Duration::days(1));
    assert!(token.expires_at > Utc::now() + Duration::hours(23));
}

#[tokio::test]
async fn test_lookup_unknown_value() {
    let ctx = create_test_context();

    let result = ctx.service.lookup("no-such-token").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenNotFound)
    ));
}

#[tokio::test]
async fn test_fresh_token_is_usable() {
    let ctx = create_test_context();
    let token = ctx.service.create(Uuid::new_v4(), lifetime()).await.unwrap();

    assert!(ctx.service.check_usable(&token).is_ok());
}

#[tokio::test]
async fn test_revoked_token_is_unusable_before_expiry() {
    let ctx = create_test_context();
    let token = ctx.service.create(Uuid::new_v4(), lifetime()).await.unwrap();

    ctx.service.revoke(&token.token).await.unwrap();

    let stored = ctx.service.lookup(&token.token).await.unwrap();
    assert!(stored.expires_at > Utc::now()); // not expired, only revoked
    assert!(stored.revoked_at.is_some());

    let result = ctx.service.check_usable(&stored);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenRevoked)
    ));
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let ctx = create_test_context();
    let token = ctx.service.create(Uuid::new_v4(), lifetime()).await.unwrap();

    ctx.service.revoke(&token.token).await.unwrap();
    let first = ctx.service.lookup(&token.token).await.unwrap();

    ctx.service.revoke(&token.token).await.unwrap();
    let second = ctx.service.lookup(&token.token).await.unwrap();

    assert_eq!(first.revoked_at, second.revoked_at);
}

#[tokio::test]
async fn test_revoke_tolerates_short_stored_values() {
    let ctx = create_test_context();

    // A row whose value is shorter than the logged prefix width
    let token = RefreshToken::new(Uuid::new_v4(), "tiny".to_string(), lifetime());
    ctx.tokens.put(token.clone()).await;

    ctx.service.revoke(&token.token).await.unwrap();
    ctx.service.revoke(&token.token).await.unwrap();

    let stored = ctx.service.lookup(&token.token).await.unwrap();
    assert!(stored.revoked_at.is_some());
}

#[tokio::test]
async fn test_revoke_unknown_value() {
    let ctx = create_test_context();

    let result = ctx.service.revoke("no-such-token").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenNotFound)
    ));
}

#[tokio::test]
async fn test_expired_token_is_unusable() {
    let ctx = create_test_context();
    let mut token = ctx.service.create(Uuid::new_v4(), lifetime()).await.unwrap();

    token.expires_at = Utc::now() - Duration::days(1);
    ctx.tokens.put(token.clone()).await;

    let result = ctx.service.check_usable(&token);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenExpired)
    ));
}

#[tokio::test]
async fn test_expired_is_reported_before_revoked() {
    let ctx = create_test_context();
    let mut token = ctx.service.create(Uuid::new_v4(), lifetime()).await.unwrap();

    token.expires_at = Utc::now() - Duration::days(1);
    token.revoke();

    let result = ctx.service.check_usable(&token);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenExpired)
    ));
}

#[tokio::test]
async fn test_identity_for_resolves_the_owner() {
    let ctx = create_test_context();
    let user = create_test_user(&ctx).await;
    let token = ctx.service.create(user.id, lifetime()).await.unwrap();

    let identity = ctx.service.identity_for(&token).await.unwrap();

    assert_eq!(identity, user.id);
}

#[tokio::test]
async fn test_identity_for_deleted_owner() {
    let ctx = create_test_context();
    let user = create_test_user(&ctx).await;
    let token = ctx.service.create(user.id, lifetime()).await.unwrap();

    ctx.users.delete(user.id).await;

    let result = ctx.service.identity_for(&token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::UserNotFound)
    ));
}

#[tokio::test]
async fn test_store_rejects_value_collision() {
    let ctx = create_test_context();
    let token = RefreshToken::new(Uuid::new_v4(), "f".repeat(64), lifetime());

    ctx.tokens.insert(token.clone()).await.unwrap();
    let result = ctx.tokens.insert(token).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Validation { .. }
    ));
}
