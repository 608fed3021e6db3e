use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::web::Data;
use crate::api::api::{api_service_body, api_service_remote_ip, api_service_response, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::peer_id_body::PeerIdBody;
use crate::api::structs::register_body::RegisterBody;
use crate::api::structs::share_body::ShareBody;
use crate::protocol::structs::peer_address::PeerAddress;

#[tracing::instrument(level = "debug")]
pub async fn api_service_peers_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    api_service_response(data.tracker_service.list_peers())
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_register_post(request: HttpRequest, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    let remote_ip = match api_service_remote_ip(&request) {
        Ok(remote_ip) => remote_ip,
        Err(response) => return response,
    };
    let register = match api_service_body::<RegisterBody>(&body) {
        Ok(register) => register,
        Err(response) => return response,
    };
    api_service_response(data.tracker_service.register(&register.peer_id, PeerAddress::new(remote_ip, register.listen_port)))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_share_post(body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    match api_service_body::<ShareBody>(&body) {
        Ok(share) => api_service_response(data.tracker_service.share(&share.peer_id, &share.filenames, share.replace)),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_heartbeat_post(body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    match api_service_body::<PeerIdBody>(&body) {
        Ok(peer) => api_service_response(data.tracker_service.heartbeat(&peer.peer_id)),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_unregister_post(body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    match api_service_body::<PeerIdBody>(&body) {
        Ok(peer) => api_service_response(data.tracker_service.unregister(&peer.peer_id)),
        Err(response) => response,
    }
}
