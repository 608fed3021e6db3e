//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::tracker::structs::tracker_service::TrackerService;

/// Injected into actix-web's application data for every handler.
///
/// ```rust,ignore
/// async fn handler(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
///     let response = data.tracker_service.list_files();
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct ApiServiceData {
    pub tracker_service: Arc<TrackerService>,
    pub api_server_config: Arc<ApiServerConfig>,
}
