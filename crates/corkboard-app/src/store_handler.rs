use std::sync::Arc;

use salvo::async_trait;

use corkboard_core::error::CoreError;
use corkboard_store::EventStore;

use crate::error::{AppError, AppResult};

pub struct StoreHandler {
    pub store: Arc<dyn EventStore + Send + Sync>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.store.clone());
    }
}

/// ## Summary
/// Retrieves the event store from the depot.
///
/// ## Errors
/// Returns an error if the event store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn EventStore + Send + Sync>> {
    depot
        .obtain::<Arc<dyn EventStore + Send + Sync>>()
        .cloned()
        .map_err(|_err| {
            AppError::CoreError(CoreError::InvariantViolation(
                "Event store not found in depot",
            ))
        })
}
