use std::future::Future;

use lnm_maps_core::model::route::{PathRequest, PathResponse};

use super::PathServiceError;

/// the external routing collaborator. implementations own transport,
/// retries and timeouts; callers only see the route or an error.
pub trait PathService {
    /// requests the path between the start and end coordinates of `request`.
    fn get_direction(
        &self,
        request: PathRequest,
    ) -> impl Future<Output = Result<PathResponse, PathServiceError>> + Send;
}
