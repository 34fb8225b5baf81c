//! Form error list and translation of server error bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category of a displayed form error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormErrorKind {
    /// Local password-confirmation mismatch
    SecurityCheck,
    /// Field validation, local or server-reported
    Validation,
    /// The server could not be reached or answered garbage
    Network,
}

/// One entry of the form error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormError {
    pub kind: FormErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl FormError {
    pub fn new(kind: FormErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    pub fn security_check(message: impl Into<String>) -> Self {
        Self::new(FormErrorKind::SecurityCheck, message)
    }

    pub fn validation(field: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FormErrorKind::Validation,
            field,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FormErrorKind::Network, message)
    }
}

/// Turns a server error body into displayable form errors.
pub trait ErrorTranslator: Send + Sync {
    /// Translate a body. An empty result means the body was not understood.
    fn translate(&self, body: &Value) -> Vec<FormError>;
}

/// Translator for the backend's field-error bodies.
///
/// Understands a single `{field, defaultMessage}` object, a list of them, and
/// an `{errors: [...]}` wrapper. `message` is accepted in place of
/// `defaultMessage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldErrorTranslator;

impl ErrorTranslator for FieldErrorTranslator {
    fn translate(&self, body: &Value) -> Vec<FormError> {
        match body {
            Value::Array(items) => items.iter().filter_map(field_error).collect(),
            Value::Object(map) => match map.get("errors") {
                Some(Value::Array(items)) => items.iter().filter_map(field_error).collect(),
                _ => field_error(body).into_iter().collect(),
            },
            _ => Vec::new(),
        }
    }
}

fn field_error(entry: &Value) -> Option<FormError> {
    let message = entry
        .get("defaultMessage")
        .or_else(|| entry.get("message"))
        .and_then(Value::as_str)?;
    let field = entry
        .get("field")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(FormError::validation(field, message))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_single_field_error() {
        let body = json!({
            "objectName": "User",
            "field": "id",
            "defaultMessage": "El usuario ya existe"
        });

        let errors = FieldErrorTranslator.translate(&body);
        assert_eq!(
            errors,
            vec![FormError::validation(
                Some("id".into()),
                "El usuario ya existe"
            )]
        );
    }

    #[test]
    fn test_error_list_keeps_order() {
        let body = json!([
            {"field": "email", "defaultMessage": "email invalido"},
            {"field": "contrasena", "defaultMessage": "muy corta"}
        ]);

        let errors = FieldErrorTranslator.translate(&body);
        let fields: Vec<_> = errors.iter().map(|e| e.field.clone().unwrap()).collect();
        assert_eq!(fields, vec!["email", "contrasena"]);
    }

    #[test]
    fn test_wrapped_errors_and_plain_message() {
        let body = json!({"errors": [{"message": "ciudad requerida"}]});
        let errors = FieldErrorTranslator.translate(&body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, None);
        assert_eq!(errors[0].message, "ciudad requerida");
    }

    #[test]
    fn test_unrecognized_body_is_empty() {
        assert!(FieldErrorTranslator.translate(&json!("boom")).is_empty());
        assert!(FieldErrorTranslator.translate(&json!({"status": 500})).is_empty());
    }

    #[test]
    fn test_kind_wire_names() {
        let json = serde_json::to_value(FormErrorKind::SecurityCheck).unwrap();
        assert_eq!(json, "securityCheck");
    }
}
