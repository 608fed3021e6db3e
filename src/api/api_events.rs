use std::convert::Infallible;
use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web::web::{Bytes, Data};
use futures_util::{stream, StreamExt};
use log::debug;
use tokio::sync::broadcast::error::RecvError;
use crate::api::api::api_validation;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::tracker::enums::tracker_event::TrackerEvent;

/// Streams change notifications as server-sent events.
///
/// The stream opens with the current peer and file lists so a new observer does not have
/// to wait for the next change. An observer that falls behind skips what it missed.
#[tracing::instrument(level = "debug")]
pub async fn api_service_events_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_validation(&data);
    let service = data.tracker_service.clone();
    let receiver = service.subscribe();

    let current = vec![
        TrackerEvent::PeerListUpdated { peers: service.registry.snapshot_peers() },
        TrackerEvent::FileListUpdated { files: service.registry.list_files() },
    ];
    let current = stream::iter(current.into_iter().map(|event| Ok::<Bytes, Infallible>(api_event_frame(&event))));

    let updates = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(event) => return Some((Ok::<Bytes, Infallible>(api_event_frame(&event)), receiver)),
                Err(RecvError::Lagged(skipped)) => {
                    debug!("[API] Event observer lagged, skipped {skipped} events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(current.chain(updates))
}

/// One `event:`/`data:` block; the data line is the event's JSON.
pub fn api_event_frame(event: &TrackerEvent) -> Bytes
{
    let payload = serde_json::to_string(event).unwrap_or_else(|_| String::from("{}"));
    Bytes::from(format!("event: {}\ndata: {}\n\n", event.name(), payload))
}
