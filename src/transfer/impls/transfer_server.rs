use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use log::{debug, error, info, warn};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::watch;
use crate::common::common::bind_tcp_listener;
use crate::peer::types::shared_share_set::SharedShareSet;
use crate::protocol::enums::transfer_reply::TransferReply;
use crate::protocol::enums::transfer_request::TransferRequest;
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{expect_message, write_message};
use crate::transfer::errors::TransferError;
use crate::transfer::structs::transfer_server::TransferServer;

impl TransferServer {
    #[tracing::instrument(level = "debug", skip(shares))]
    pub async fn new(shares: SharedShareSet, bind_address: SocketAddr, max_frame_size: u32, handshake_timeout: Duration) -> tokio::io::Result<TransferServer>
    {
        let listener = bind_tcp_listener(bind_address)?;
        Ok(TransferServer {
            listener,
            shares,
            max_frame_size,
            handshake_timeout,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts downloads until `rx` flips or its sender is dropped. Each connection is
    /// served on its own task.
    #[tracing::instrument(level = "debug", skip(self, rx))]
    pub async fn start(&self, mut rx: watch::Receiver<bool>)
    {
        let local_addr = self.local_addr().map(|address| address.to_string()).unwrap_or_default();
        info!("[TRANSFER] Serving shared files on {local_addr}");
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TRANSFER] Stopping transfer server on {local_addr}...");
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let shares = self.shares.clone();
                            let max_frame_size = self.max_frame_size;
                            let handshake_timeout = self.handshake_timeout;
                            tokio::spawn(async move {
                                match TransferServer::serve_connection(shares, stream, max_frame_size, handshake_timeout).await {
                                    Ok(Some((filename, sent))) => {
                                        info!("[TRANSFER] Sent {filename} ({sent} bytes) to {remote_addr}");
                                    }
                                    Ok(None) => {}
                                    Err(error) => {
                                        warn!("[TRANSFER] Transfer to {remote_addr} failed: {error}");
                                    }
                                }
                            });
                        }
                        Err(error) => {
                            error!("[TRANSFER] Accept failed on {local_addr}: {error}");
                            sentry::capture_error(&error);
                            tokio::time::sleep(Duration::from_millis(50)).await;
                        }
                    }
                }
            }
        }
    }

    /// Runs the server side of one transfer.
    ///
    /// Returns the filename and bytes sent, or `None` when the file was not found.
    pub async fn serve_connection(shares: SharedShareSet, mut stream: TcpStream, max_frame_size: u32, handshake_timeout: Duration) -> Result<Option<(String, u64)>, TransferError>
    {
        let request = tokio::time::timeout(handshake_timeout, expect_message::<TransferRequest, _>(&mut stream, max_frame_size))
            .await
            .map_err(|_| TransferError::Timeout("download request"))??;
        let filename = match request {
            TransferRequest::Download { filename } => filename,
            TransferRequest::Ready => {
                return Err(ProtocolError::Malformed(String::from("expected a download request")).into());
            }
        };

        let path = shares.read().get(&filename).cloned();
        let Some((file, size)) = Self::open_shared(path).await else {
            debug!("[TRANSFER] Requested file {filename} is not shared");
            write_message(&mut stream, &TransferReply::NotFound).await?;
            let _ = stream.shutdown().await;
            return Ok(None);
        };

        write_message(&mut stream, &TransferReply::Found { size }).await?;
        let ack = tokio::time::timeout(handshake_timeout, expect_message::<TransferRequest, _>(&mut stream, max_frame_size))
            .await
            .map_err(|_| TransferError::Timeout("download acknowledgment"))??;
        if ack != TransferRequest::Ready {
            return Err(ProtocolError::Malformed(String::from("expected a ready acknowledgment")).into());
        }

        let mut limited = file.take(size);
        let sent = tokio::io::copy(&mut limited, &mut stream).await.map_err(TransferError::Network)?;
        stream.shutdown().await.map_err(TransferError::Network)?;
        Ok(Some((filename, sent)))
    }

    async fn open_shared(path: Option<PathBuf>) -> Option<(File, u64)>
    {
        let path = path?;
        let file = File::open(&path).await.ok()?;
        let metadata = file.metadata().await.ok()?;
        if !metadata.is_file() {
            return None;
        }
        Some((file, metadata.len()))
    }
}
