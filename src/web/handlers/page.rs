//! Form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::api::routes::ADD_SSL_PATH;
use crate::state::AppState;
use crate::web::locale::LocaleText;

/// Link shown above the form for users without a domain yet.
pub const REGISTER_URL: &str = "https://tb.netassist.ua";

/// Template for the form page.
///
/// Renders `templates/index.html` with:
/// - Credential form with per-field validation
/// - Script posting to the relay endpoint
/// - Usage instructions
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub lang: &'static str,
    pub text: &'static LocaleText,
    pub register_url: &'static str,
    pub api_path: &'static str,
}

/// Renders the form page in the configured locale.
///
/// # Endpoint
///
/// Any method and path other than `POST /api/add-ssl`.
pub async fn page_handler(State(state): State<AppState>) -> impl IntoResponse {
    PageTemplate {
        lang: state.locale.code(),
        text: state.locale.text(),
        register_url: REGISTER_URL,
        api_path: ADD_SSL_PATH,
    }
}
