use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use voterslip_core::error::CoreError;
use voterslip_store::store::VoterStore;

pub struct StoreHandler {
    pub store: Arc<dyn VoterStore>,
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
        // Insert a reference to the store client into the depot
        let store: Arc<dyn VoterStore> = self.store.clone();
        depot.inject(store);
    }
}

/// ## Summary
/// Retrieves the voter store from the depot.
///
/// ## Errors
/// Returns an error if the voter store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn VoterStore>> {
    depot
        .obtain::<Arc<dyn VoterStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Voter store not found in depot").into())
}
