//! Application service — definition registry use-cases.
//!
//! Pure delegations to the [`DefinitionStore`] port. Input is validated here
//! so a bad request never reaches storage.

use anyhow::Result;
use tracing::info;

use crate::application::ports::DefinitionStore;
use crate::domain::{ServiceDefinition, validate_content, validate_name};

/// Create or overwrite a definition.
///
/// # Errors
///
/// Returns `ServiceError::InvalidArgument` for an empty/unsafe name or empty
/// content, or an I/O error from the store.
pub fn update(store: &impl DefinitionStore, name: &str, content: &str) -> Result<()> {
    validate_name(name)?;
    validate_content(content)?;
    store.put(name, content)?;
    info!(service = name, bytes = content.len(), "definition written");
    Ok(())
}

/// Remove a definition. Removing an absent definition succeeds.
///
/// # Errors
///
/// Returns `ServiceError::InvalidArgument` for an empty/unsafe name, or an
/// I/O error from the store.
pub fn remove(store: &impl DefinitionStore, name: &str) -> Result<()> {
    validate_name(name)?;
    store.delete(name)?;
    info!(service = name, "definition removed");
    Ok(())
}

/// Read a definition.
///
/// # Errors
///
/// Returns `ServiceError::InvalidArgument` for an empty/unsafe name or
/// `ServiceError::NotFound` if absent.
pub fn show(store: &impl DefinitionStore, name: &str) -> Result<ServiceDefinition> {
    validate_name(name)?;
    store.get(name)
}

/// Names of all stored definitions.
///
/// # Errors
///
/// Returns an error if the storage root cannot be enumerated.
pub fn list(store: &impl DefinitionStore) -> Result<Vec<String>> {
    store.list()
}
