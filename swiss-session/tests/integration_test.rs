//! Integration tests for swiss-session

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use swiss_session::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Cart {
    items: Vec<String>,
    total_cents: u64,
}

#[test]
fn test_login_flow_across_requests() {
    let store = MemorySessionStore::default();
    let config = SessionConfig::default();

    // First request: log in and remember a cart.
    let mut ctx = SessionContext::start(&store, None, &config).unwrap();
    ctx.put("user_id", 42).unwrap();
    ctx.put(
        "cart",
        Cart {
            items: vec!["book".into()],
            total_cents: 1999,
        },
    )
    .unwrap();
    ctx.persist(&store).unwrap();
    let id = ctx.id().unwrap().to_string();

    // Second request resumes by ID.
    let mut ctx = SessionContext::start(&store, Some(&id), &config).unwrap();
    assert_eq!(ctx.id(), Some(id.as_str()));
    assert!(ctx.has(["user_id", "cart"]).unwrap());
    assert_eq!(ctx.get_as::<Cart>("cart").unwrap().unwrap().total_cents, 1999);

    // Logout.
    ctx.destroy(&store).unwrap();
    assert!(!ctx.is_active());
    assert_eq!(store.count().unwrap(), 0);

    let resumed = SessionContext::start(&store, Some(&id), &config).unwrap();
    assert_ne!(resumed.id(), Some(id.as_str()));
}

#[test]
fn test_all_keeps_insertion_order() {
    let mut ctx = SessionContext::new(Session::generate(std::time::Duration::from_secs(60)));
    ctx.put("b", 1).unwrap();
    ctx.put("a", 2).unwrap();
    ctx.put("c", 3).unwrap();

    let keys: Vec<_> = ctx.all().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_forget_from_untyped_input() {
    let mut ctx = SessionContext::new(Session::generate(std::time::Duration::from_secs(60)));
    ctx.put("flash", "saved").unwrap();
    ctx.put("errors", json!([])).unwrap();

    ctx.forget_value(&json!("flash")).unwrap();
    assert_eq!(ctx.get("flash", Value::Null).unwrap(), Value::Null);

    let err = ctx.forget_value(&json!({"name": "errors"})).unwrap_err();
    assert!(matches!(err, SessionError::InvalidArgument(_)));
    assert!(err.to_string().starts_with("Invalid argument"));
}

#[test]
fn test_csrf_round_trip_through_store() {
    let store = MemorySessionStore::default();
    let config = SessionConfig::default();
    let csrf = CsrfConfig::default();

    let mut ctx = SessionContext::start(&store, None, &config).unwrap();
    let token = issue_csrf_token(&mut ctx, &csrf).unwrap();
    ctx.persist(&store).unwrap();
    let id = ctx.id().unwrap().to_string();

    let ctx = SessionContext::start(&store, Some(&id), &config).unwrap();
    assert_eq!(csrf_token(&ctx, "_token").unwrap(), Some(token.clone()));
    assert_eq!(
        csrf_field(&ctx, "_token").unwrap(),
        format!(r#"<input type="hidden" name="_token" value="{}">"#, token)
    );
    assert!(verify_csrf_token(&ctx, &csrf, &token).unwrap());
    assert!(!verify_csrf_token(&ctx, &csrf, &token[1..]).unwrap());
}

#[test]
fn test_inactive_error_message() {
    let ctx = SessionContext::inactive();
    let err = ctx.all().unwrap_err();
    assert_eq!(err.to_string(), "Session is not active");
}
