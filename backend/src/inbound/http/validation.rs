//! Request body extraction settings shared by the HTTP handlers.

use actix_web::web;
use tracing::warn;

use crate::domain::Error;

/// JSON extractor configuration that turns parse failures into domain errors.
///
/// A body that is not valid JSON, or whose fields have the wrong type, is an
/// internal error: clients receive the redacted 500 body while the parser
/// failure is logged at `warn`. Missing required fields are reported by the
/// handlers themselves.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::validation::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!(
            method = %req.method(),
            path = %req.path(),
            error = %err,
            "rejected malformed request body"
        );
        Error::internal(format!("unreadable request body: {err}")).into()
    })
}
