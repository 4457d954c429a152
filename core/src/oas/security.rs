#![deny(missing_docs)]

//! # Security Schemes
//!
//! Maps the descriptor's `authType` onto `components.securitySchemes` and the
//! operation-level `security` requirement.

use crate::descriptor::AuthType;
use serde_json::{json, Map, Value};
use tracing::warn;

/// Key of the single security scheme in `components.securitySchemes`.
pub const SECURITY_SCHEME_NAME: &str = "myAuth";

/// What a given `authType` contributes to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityTreatment {
    /// No components, no operation security.
    None,
    /// HTTP authentication with the given scheme (`bearer` / `basic`).
    Http(&'static str),
}

/// Classifies an auth type.
///
/// Unrecognized labels get the same treatment as `No Auth`.
pub fn security_treatment(auth: &AuthType) -> SecurityTreatment {
    match auth {
        AuthType::NoAuth => SecurityTreatment::None,
        AuthType::BearerToken => SecurityTreatment::Http("bearer"),
        AuthType::BasicAuth => SecurityTreatment::Http("basic"),
        AuthType::Unrecognized(label) => {
            warn!(auth_type = %label, "unrecognized auth type, emitting no security scheme");
            SecurityTreatment::None
        }
    }
}

/// Adds `components` to the document root and `security` to the operation as needed.
pub fn apply_security(
    auth: &AuthType,
    doc: &mut Map<String, Value>,
    operation: &mut Map<String, Value>,
) {
    let SecurityTreatment::Http(scheme) = security_treatment(auth) else {
        return;
    };

    doc.insert(
        "components".to_string(),
        json!({
            "securitySchemes": {
                SECURITY_SCHEME_NAME: { "type": "http", "scheme": scheme }
            }
        }),
    );
    operation.insert(
        "security".to_string(),
        json!([{ SECURITY_SCHEME_NAME: [] }]),
    );
}
