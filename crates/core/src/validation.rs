//! Request validation helpers.
//!
//! Payload DTOs derive [`validator::Validate`]; [`validate_payload`] turns the
//! resulting field errors into a single [`CoreError::Validation`] message.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of actor ids accepted by a single link request.
pub const MAX_LINK_BATCH: usize = 100;

/// Run the derived validation rules on `payload`.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), CoreError> {
    payload
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Validate that an identifier is a positive database id.
pub fn validate_id(field: &str, id: DbId) -> Result<(), CoreError> {
    if id < 1 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

/// Validate a batch of actor ids submitted for cast linking.
pub fn validate_actor_ids(actor_ids: &[DbId]) -> Result<(), CoreError> {
    if actor_ids.len() > MAX_LINK_BATCH {
        return Err(CoreError::Validation(format!(
            "Too many actor_ids: {} (max {MAX_LINK_BATCH})",
            actor_ids.len()
        )));
    }
    actor_ids
        .iter()
        .try_for_each(|&id| validate_id("actor_ids", id))
}

/// Flatten field errors into `"field: code, field: code"`, sorted by field.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join(", ")
}
