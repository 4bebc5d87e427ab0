// rest/routes/pages.rs — placeholder portal pages.
//
// Minimal server-rendered stand-ins for the real front end. They exist so
// the navigation guard has something to gate; the root page additionally
// renders the deny notice carried in the redirect query parameters.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::defaults;
use crate::AppContext;

#[derive(Debug, Deserialize, Default)]
pub struct HomeQuery {
    notice: Option<String>,
    feature: Option<String>,
}

pub async fn home(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<HomeQuery>,
) -> Html<String> {
    let tenant = defaults::app_defaults().tenant;

    let notice = if query.notice.as_deref() == Some("feature-disabled") {
        // Only echo feature keys the store actually knows; anything else
        // renders the generic notice.
        let flags = ctx.flags.read().await;
        let label = query
            .feature
            .as_deref()
            .filter(|key| flags.contains_key(*key))
            .map(|key| format!(" ({key})"))
            .unwrap_or_default();
        format!("<p class=\"notice\">Feature not enabled{label}.</p>")
    } else {
        String::new()
    };

    Html(page(
        &tenant.name,
        &format!(
            "{notice}<p>{}</p>\
             <nav><a href=\"/auth/login\">Login</a> \
             <a href=\"/cart\">Cart</a> \
             <a href=\"/features\">Features</a></nav>",
            tenant.description
        ),
    ))
}

pub async fn auth_login() -> Html<String> {
    Html(page("Login", "<p>Sign in to your account.</p>"))
}

pub async fn auth_register() -> Html<String> {
    Html(page("Register", "<p>Create a new account.</p>"))
}

pub async fn cart() -> Html<String> {
    Html(page("Cart", "<p>Your shopping cart is empty.</p>"))
}

pub async fn checkout() -> Html<String> {
    Html(page("Checkout", "<p>Review and place your order.</p>"))
}

pub async fn features() -> Html<String> {
    Html(page(
        "Feature Flags",
        "<p>Feature flag administration panel.</p>",
    ))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><title>{title}</title></head>\
         <body><h1>{title}</h1>{body}\
         <footer>{} v{}</footer></body></html>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
