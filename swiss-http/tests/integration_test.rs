//! Integration tests for swiss-http

use swiss_http::RequestContext;

#[test]
fn test_redirect_back_after_form_post() {
    let ctx = RequestContext::new("shop.example")
        .with_https(true)
        .with_request_uri("/checkout")
        .with_referer("https://shop.example/cart");

    assert_eq!(ctx.previous_url(), "https://shop.example/cart");
    assert_eq!(ctx.to("/orders/17"), "https://shop.example/orders/17");
}

#[test]
fn test_context_from_json() {
    let ctx: RequestContext = serde_json::from_str(
        r#"{"https": false, "host": "localhost:3000", "request_uri": "/", "referer": null}"#,
    )
    .unwrap();

    assert_eq!(ctx.current_url(), "http://localhost:3000/");
    assert_eq!(ctx.previous_url(), "http://localhost:3000");
}

#[test]
fn test_request_without_host() {
    let request = http::Request::builder().uri("/x").body(()).unwrap();
    let ctx = RequestContext::from_request(&request);
    assert_eq!(ctx.base_url(), "http://");
    assert_eq!(ctx.request_uri, "/x");
}
