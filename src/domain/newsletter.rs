// src/domain/newsletter.rs

use crate::errors::ServerError;

/// Lowercased, trimmed address with a non-empty mailbox and domain part.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((mailbox, domain)) if !mailbox.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(ServerError::BadRequest(format!(
            "newsletter signup needs a valid email address, got {email:?}"
        ))),
    }
}

/// Accepts a signup. Nothing is stored; the address is only logged.
pub fn subscribe(raw_email: &str) -> Result<String, ServerError> {
    let email = normalize_email(raw_email)?;
    log::info!("newsletter signup: {email}");
    Ok(email)
}
