use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::{api_service_response, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_keyword::QueryKeyword;
use crate::protocol::structs::tracker_response::TrackerResponse;

#[tracing::instrument(level = "debug")]
pub async fn api_service_files_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    api_service_response(data.tracker_service.list_files())
}

/// A missing keyword searches for the empty string, which matches every file.
#[tracing::instrument(level = "debug")]
pub async fn api_service_search_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    let params = match web::Query::<QueryKeyword>::from_query(request.query_string()) {
        Ok(params) => params.into_inner(),
        Err(error) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(TrackerResponse::error(format!("malformed request: {error}")));
        }
    };
    api_service_response(data.tracker_service.search(params.keyword.as_deref().unwrap_or_default()))
}
