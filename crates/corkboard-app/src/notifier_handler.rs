use std::sync::Arc;

use salvo::async_trait;

use corkboard_core::error::CoreError;
use corkboard_service::notify::Notifier;

use crate::error::{AppError, AppResult};

pub struct NotifierHandler {
    pub notifier: Arc<Notifier>,
}

#[async_trait]
impl salvo::Handler for NotifierHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.notifier.clone());
    }
}

/// ## Summary
/// Retrieves the submission notifier from the depot.
///
/// ## Errors
/// Returns an error if the notifier is not found in the depot.
pub fn get_notifier_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Notifier>> {
    depot.obtain::<Arc<Notifier>>().cloned().map_err(|_err| {
        AppError::CoreError(CoreError::InvariantViolation("Notifier not found in depot"))
    })
}
