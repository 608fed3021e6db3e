use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::api_validation;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    HttpResponse::Ok().content_type(ContentType::json()).json(data.tracker_service.get_stats())
}
