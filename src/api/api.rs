use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::middleware::Condition;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde::de::DeserializeOwned;
use crate::api::api_events::api_service_events_get;
use crate::api::api_files::{api_service_files_get, api_service_search_get};
use crate::api::api_peers::{api_service_heartbeat_post, api_service_peers_get, api_service_register_post, api_service_share_post, api_service_unregister_post};
use crate::api::api_stats::api_service_stats_get;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::protocol::structs::tracker_response::TrackerResponse;
use crate::stats::enums::stats_event::StatsEvent;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("api/peers").route(web::get().to(api_service_peers_get)));
        cfg.service(web::resource("api/register").route(web::post().to(api_service_register_post)));
        cfg.service(web::resource("api/share").route(web::post().to(api_service_share_post)));
        cfg.service(web::resource("api/heartbeat").route(web::post().to(api_service_heartbeat_post)));
        cfg.service(web::resource("api/unregister").route(web::post().to(api_service_unregister_post)));
        cfg.service(web::resource("api/files").route(web::get().to(api_service_files_get)));
        cfg.service(web::resource("api/search").route(web::get().to(api_service_search_get)));
        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("api/events").route(web::get().to(api_service_events_get)));
    })
}

/// Builds the HTTP server for one `[[api_server]]` block. The caller drives the returned
/// future and stops it through the handle.
pub fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let config = data.api_server_config.clone();
    let sentry_enabled = data.tracker_service.config.sentry.enabled;

    info!("[API] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .wrap(Condition::new(sentry_enabled, sentry_actix::Sentry::new()))
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    debug!("[API] No route for {} {}", request.method(), request.path());
    HttpResponse::NotFound().content_type(ContentType::json()).json(TrackerResponse::error("not found"))
}

/// Counts the request towards the API statistics.
pub fn api_validation(data: &Data<Arc<ApiServiceData>>)
{
    data.tracker_service.update_stats(StatsEvent::ApiHandled, 1);
}

/// The caller's IP, which becomes the host of a registering peer.
pub fn api_service_remote_ip(request: &HttpRequest) -> Result<IpAddr, HttpResponse>
{
    match request.peer_addr() {
        Some(address) => Ok(address.ip()),
        None => Err(HttpResponse::BadRequest().content_type(ContentType::json()).json(TrackerResponse::error("unknown remote address"))),
    }
}

/// Decodes a JSON request body, answering `400` with an error response when it does not parse.
pub fn api_service_body<T: DeserializeOwned>(body: &web::Bytes) -> Result<T, HttpResponse>
{
    serde_json::from_slice::<T>(body).map_err(|error| {
        HttpResponse::BadRequest().content_type(ContentType::json()).json(TrackerResponse::error(format!("malformed request: {error}")))
    })
}

pub fn api_service_response(response: TrackerResponse) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::json()).json(response)
}
