use std::collections::BTreeMap;
use std::time::Duration;
use log::debug;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::errors::SessionError;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::protocol::enums::tracker_request::TrackerRequest;
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{expect_message, write_message};
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::tracker_response::TrackerResponse;

impl TrackerClient {
    pub fn new(tracker_address: &str, connect_timeout: Duration, request_timeout: Duration, max_frame_size: u32) -> TrackerClient
    {
        TrackerClient {
            tracker_address: tracker_address.to_string(),
            connect_timeout,
            request_timeout,
            max_frame_size,
            connection: Mutex::new(None),
        }
    }

    pub fn from_config(config: &PeerConfig) -> TrackerClient
    {
        Self::new(&config.tracker_address, config.connect_timeout(), config.handshake_timeout(), config.max_frame_size)
    }

    async fn connect(&self) -> Result<TcpStream, SessionError>
    {
        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(self.tracker_address.as_str())).await {
            Err(_) => Err(SessionError::Timeout("tracker connection")),
            Ok(Err(error)) => Err(SessionError::Network(error)),
            Ok(Ok(stream)) => {
                debug!("[PEER] Connected to tracker at {}", self.tracker_address);
                Ok(stream)
            }
        }
    }

    async fn exchange(&self, stream: &mut TcpStream, request: &TrackerRequest) -> Result<TrackerResponse, SessionError>
    {
        write_message(stream, request).await?;
        let response = tokio::time::timeout(self.request_timeout, expect_message::<TrackerResponse, _>(stream, self.max_frame_size))
            .await
            .map_err(|_| SessionError::Timeout("tracker response"))??;
        Ok(response)
    }

    /// Sends one request over the shared connection.
    ///
    /// A request that fails on a reused connection is retried once on a fresh one, since
    /// the tracker may have closed the idle connection in the meantime.
    pub async fn request(&self, request: &TrackerRequest) -> Result<TrackerResponse, SessionError>
    {
        let mut connection = self.connection.lock().await;
        let mut reused = connection.is_some();
        loop {
            let mut stream = match connection.take() {
                Some(stream) => stream,
                None => self.connect().await?,
            };
            match self.exchange(&mut stream, request).await {
                Ok(response) => {
                    *connection = Some(stream);
                    return Ok(response);
                }
                Err(error) if reused && Self::is_stale_connection(&error) => {
                    debug!("[PEER] Tracker connection went away ({error}), reconnecting");
                    reused = false;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn is_stale_connection(error: &SessionError) -> bool
    {
        matches!(
            error,
            SessionError::Protocol(ProtocolError::Io(_))
                | SessionError::Protocol(ProtocolError::ConnectionClosed)
                | SessionError::Protocol(ProtocolError::Truncated)
        )
    }

    /// Like [`request`](Self::request), but an error status becomes [`SessionError::Rejected`].
    pub async fn request_ok(&self, request: &TrackerRequest) -> Result<TrackerResponse, SessionError>
    {
        let response = self.request(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(SessionError::Rejected {
                command: request.kind(),
                message: response.message_or_default().to_string(),
            })
        }
    }

    pub async fn register(&self, peer_id: &str, listen_port: u16) -> Result<TrackerResponse, SessionError>
    {
        self.request_ok(&TrackerRequest::Register { peer_id: peer_id.to_string(), listen_port }).await
    }

    pub async fn share(&self, peer_id: &str, filenames: Vec<String>, replace: bool) -> Result<TrackerResponse, SessionError>
    {
        self.request_ok(&TrackerRequest::Share { peer_id: peer_id.to_string(), filenames, replace }).await
    }

    pub async fn search(&self, keyword: &str) -> Result<BTreeMap<String, Vec<PeerAddress>>, SessionError>
    {
        let response = self.request_ok(&TrackerRequest::Search { keyword: keyword.to_string() }).await?;
        Ok(response.results.unwrap_or_default())
    }

    pub async fn list_peers(&self) -> Result<Vec<(String, PeerAddress)>, SessionError>
    {
        let response = self.request_ok(&TrackerRequest::ListPeers).await?;
        Ok(response.peers.unwrap_or_default())
    }

    pub async fn list_files(&self) -> Result<Vec<String>, SessionError>
    {
        let response = self.request_ok(&TrackerRequest::ListFiles).await?;
        Ok(response.files.unwrap_or_default())
    }

    /// Returns the raw response so the caller can tell an expired registration apart.
    pub async fn heartbeat(&self, peer_id: &str) -> Result<TrackerResponse, SessionError>
    {
        self.request(&TrackerRequest::Heartbeat { peer_id: peer_id.to_string() }).await
    }

    pub async fn unregister(&self, peer_id: &str) -> Result<TrackerResponse, SessionError>
    {
        self.request_ok(&TrackerRequest::Unregister { peer_id: peer_id.to_string() }).await
    }
}
