use axum::{Extension, Router, response::Html, routing::get};

use sanctum_bridge_axum::{AuthSession, BRIDGE_ROUTE_PREFIX, BridgeState, Token};

pub(super) fn router() -> Router<BridgeState> {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard))
}

fn display_name(user: &serde_json::Value) -> &str {
    user["name"]
        .as_str()
        .or_else(|| user["email"].as_str())
        .unwrap_or("there")
}

async fn index(auth: Option<AuthSession>) -> Html<String> {
    let prefix = BRIDGE_ROUTE_PREFIX.as_str();
    match auth {
        Some(auth) => Html(format!(
            "<h1>Welcome back, {}</h1>\
             <p><a href=\"/dashboard\">Dashboard</a></p>\
             <form method=\"post\" action=\"{prefix}/logout\"><button>Log out</button></form>",
            display_name(&auth.session.user)
        )),
        None => Html(format!(
            "<h1>Welcome</h1>\
             <p>Log in with <code>POST {prefix}/login</code> \
             or register with <code>POST {prefix}/register</code>.</p>"
        )),
    }
}

// Only reachable through the route guard, which puts the token in the extensions
async fn dashboard(Extension(token): Extension<Token>) -> Html<String> {
    Html(format!("<h1>Hi {}!</h1>", display_name(&token.user)))
}
