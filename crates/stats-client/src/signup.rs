// File: crates/stats-client/src/signup.rs
// Summary: Beta signup form: field validation and submission to the signup endpoint.

use std::collections::HashMap;

use crate::error::{ClientError, FieldError};

/// Validate the signup fields, returning one error per offending field for
/// inline display. An empty list means the form may be submitted.
pub fn validate_signup(fields: &HashMap<String, String>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let email_missing = fields
        .get("email")
        .map(|v| v.trim().is_empty())
        .unwrap_or(true);
    if email_missing {
        errors.push(FieldError {
            field: "email".to_string(),
            message: "hey there... you need an email".to_string(),
        });
    }
    errors
}

/// Validate, then POST the form-field map to the signup endpoint.
///
/// Validation failures never leave the client; they come back as
/// [`ClientError::FormInvalid`] so the shell can attach each message to its
/// field. The surrounding page is unaffected either way.
pub async fn submit_signup(
    client: &reqwest::Client,
    endpoint: &str,
    fields: &HashMap<String, String>,
) -> Result<(), ClientError> {
    let errors = validate_signup(fields);
    if !errors.is_empty() {
        return Err(ClientError::FormInvalid(errors));
    }

    let response = client.post(endpoint).form(fields).send().await?;
    if !response.status().is_success() {
        return Err(ClientError::BadStatus(response.status().as_u16()));
    }
    Ok(())
}
