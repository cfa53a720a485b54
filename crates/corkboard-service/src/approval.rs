//! Event approval via the per-event api key.

use corkboard_store::{EventStore, StoreError};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Approves the event identified by `id` when `api_key` matches its stored
/// key. Re-approving is a no-op success.
///
/// ## Errors
/// - [`ServiceError::MissingApiKey`] when no key was supplied at all.
/// - A not-found store error when the key does not name an existing
///   id/key pair; an unparseable key is indistinguishable from a wrong one.
#[tracing::instrument(skip(store, api_key))]
pub fn approve_event(
    store: &dyn EventStore,
    id: Uuid,
    api_key: Option<&str>,
) -> ServiceResult<()> {
    let Some(api_key) = api_key else {
        tracing::warn!(event_id = %id, "Approval attempted without api key");
        return Err(ServiceError::MissingApiKey);
    };

    let api_key =
        Uuid::parse_str(api_key).map_err(|_err| StoreError::EventNotFound(id))?;
    store.approve(id, api_key)?;
    Ok(())
}
