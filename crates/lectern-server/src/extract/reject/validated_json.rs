//! JSON extractor that runs `validator` rules after deserialization.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::Json;
use crate::handler::{Error, ErrorKind};

/// JSON extractor that validates the body with [`Validate`] before the
/// handler runs.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new [`ValidateJson`] wrapper.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self::new(data))
    }
}

type ErrorParams = HashMap<Cow<'static, str>, serde_json::Value>;

fn param_number(params: &ErrorParams, key: &str) -> Option<f64> {
    params.get(key).and_then(serde_json::Value::as_f64)
}

fn describe_length(field: &str, params: &ErrorParams) -> String {
    let (min, max) = (param_number(params, "min"), param_number(params, "max"));
    match (min, max) {
        (Some(min), Some(max)) if min == max => {
            format!("Field '{field}' must be exactly {min} characters long")
        }
        (Some(min), Some(max)) => {
            format!("Field '{field}' must be between {min} and {max} characters long")
        }
        (Some(min), None) => format!("Field '{field}' must be at least {min} characters long"),
        (None, Some(max)) => format!("Field '{field}' must be at most {max} characters long"),
        (None, None) => format!("Field '{field}' has invalid length"),
    }
}

fn describe_range(field: &str, params: &ErrorParams) -> String {
    let (min, max) = (param_number(params, "min"), param_number(params, "max"));
    match (min, max) {
        (Some(min), Some(max)) => format!("Field '{field}' must be between {min} and {max}"),
        (Some(min), None) => format!("Field '{field}' must be at least {min}"),
        (None, Some(max)) => format!("Field '{field}' must be at most {max}"),
        (None, None) => format!("Field '{field}' is out of range"),
    }
}

fn describe_error(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return format!("Field '{field}': {message}");
    }

    match error.code.as_ref() {
        "length" => describe_length(field, &error.params),
        "range" => describe_range(field, &error.params),
        "url" => format!("Field '{field}' must be a valid URL (e.g., https://example.com)"),
        "required" => format!("Field '{field}' is required"),
        code => format!("Field '{field}' failed validation: {code}"),
    }
}

/// Flattens nested struct and list errors into `parent.child` / `list[i].child` paths.
fn collect_messages(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let path = match (prefix, field.as_ref()) {
            (Some(prefix), "__all__") => prefix.to_owned(),
            (None, "__all__") => "request".to_owned(),
            (Some(prefix), field) => format!("{prefix}.{field}"),
            (None, field) => field.to_owned(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| describe_error(&path, e)));
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(None, &errors, &mut messages);

        tracing::warn!(errors = ?messages, "request validation failed");

        let message = match messages.as_slice() {
            [] => "Validation failed".to_owned(),
            [single] => single.clone(),
            multiple => multiple.join(". "),
        };

        ErrorKind::BadRequest
            .with_message(message)
            .with_resource("request")
    }
}

impl<T> aide::OperationInput for ValidateJson<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        Json::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1, max = 4))]
        title: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(url)]
        url: String,
        #[validate(nested)]
        items: Vec<Inner>,
    }

    #[test]
    fn nested_errors_carry_paths() {
        let outer = Outer {
            url: "not a url".into(),
            items: vec![
                Inner { title: "ok".into() },
                Inner { title: String::new() },
            ],
        };

        let errors = outer.validate().unwrap_err();
        let mut messages = Vec::new();
        collect_messages(None, &errors, &mut messages);

        assert!(messages.iter().any(|m| m.starts_with("Field 'items[1].title'")));
        assert!(messages.iter().any(|m| m.starts_with("Field 'url' must be a valid URL")));
    }

    #[test]
    fn validation_errors_become_bad_request() {
        let errors = Inner { title: "too long".into() }.validate().unwrap_err();
        let error: Error<'static> = errors.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(
            error.message(),
            Some("Field 'title' must be between 1 and 4 characters long")
        );
    }
}
