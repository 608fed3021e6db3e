use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info};
use tokio::net::TcpStream;
use tokio::sync::watch;
use crate::common::common::bind_tcp_listener;
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{read_frame, write_message};
use crate::protocol::structs::tracker_response::TrackerResponse;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::tracker_server::TrackerServer;
use crate::tracker::structs::tracker_service::TrackerService;

impl TrackerServer {
    #[tracing::instrument(level = "debug")]
    pub async fn new(service: Arc<TrackerService>, bind_address: SocketAddr) -> tokio::io::Result<TrackerServer>
    {
        let listener = bind_tcp_listener(bind_address)?;
        Ok(TrackerServer {
            listener,
            service,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts connections until `rx` flips or its sender is dropped.
    #[tracing::instrument(level = "debug", skip(self, rx))]
    pub async fn start(&self, mut rx: watch::Receiver<bool>)
    {
        let local_addr = self.local_addr().map(|address| address.to_string()).unwrap_or_default();
        info!("[TRACKER] Listening on {local_addr}");
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TRACKER] Stopping tracker server on {local_addr}...");
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            self.service.update_stats(StatsEvent::ConnectionsHandled, 1);
                            let service = self.service.clone();
                            let rx = rx.clone();
                            tokio::spawn(async move {
                                TrackerServer::handle_connection(service, stream, remote_addr, rx).await;
                            });
                        }
                        Err(error) => {
                            error!("[TRACKER] Accept failed on {local_addr}: {error}");
                            sentry::capture_error(&error);
                            tokio::time::sleep(Duration::from_millis(50)).await;
                        }
                    }
                }
            }
        }
    }

    /// Serves framed requests on one connection, one response per request, until the
    /// client closes, goes idle, or sends something that cannot be resynchronised.
    pub async fn handle_connection(service: Arc<TrackerService>, mut stream: TcpStream, remote_addr: SocketAddr, mut rx: watch::Receiver<bool>)
    {
        let max_frame_size = service.config.tracker.max_frame_size;
        let idle_timeout = service.config.tracker.idle_timeout();
        debug!("[TRACKER] Connection from {remote_addr}");

        loop {
            let frame = tokio::select! {
                _ = rx.changed() => break,
                frame = tokio::time::timeout(idle_timeout, read_frame(&mut stream, max_frame_size)) => frame,
            };

            let payload = match frame {
                Err(_) => {
                    debug!("[TRACKER] Connection from {remote_addr} idle for {}s, closing", idle_timeout.as_secs());
                    break;
                }
                Ok(Ok(None)) => break,
                Ok(Ok(Some(payload))) => payload,
                Ok(Err(error @ ProtocolError::FrameTooLarge { .. })) => {
                    service.update_stats(StatsEvent::BadRequests, 1);
                    debug!("[TRACKER] Closing connection from {remote_addr}: {error}");
                    let _ = write_message(&mut stream, &TrackerResponse::error(error.to_string())).await;
                    break;
                }
                Ok(Err(ProtocolError::Truncated)) => {
                    debug!("[TRACKER] Connection from {remote_addr} closed mid-frame");
                    break;
                }
                Ok(Err(error)) => {
                    debug!("[TRACKER] Read from {remote_addr} failed: {error}");
                    sentry::capture_error(&error);
                    break;
                }
            };

            let response = service.handle_payload(&payload, remote_addr.ip());
            if let Err(error) = write_message(&mut stream, &response).await {
                debug!("[TRACKER] Write to {remote_addr} failed: {error}");
                break;
            }
        }
    }
}
