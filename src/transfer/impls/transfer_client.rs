use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::{debug, info};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use uuid::Uuid;
use crate::common::common::is_safe_filename;
use crate::config::structs::peer_config::PeerConfig;
use crate::protocol::enums::transfer_reply::TransferReply;
use crate::protocol::enums::transfer_request::TransferRequest;
use crate::protocol::protocol::{expect_message, write_message};
use crate::transfer::errors::TransferError;
use crate::transfer::structs::transfer_client::TransferClient;
use crate::transfer::structs::transfer_session::TransferSession;

pub const RECEIVE_BUFFER_SIZE: usize = 64 * 1024;

impl TransferClient {
    pub fn new(connect_timeout: Duration, handshake_timeout: Duration, max_frame_size: u32) -> TransferClient
    {
        TransferClient {
            connect_timeout,
            handshake_timeout,
            max_frame_size,
        }
    }

    pub fn from_config(config: &PeerConfig) -> TransferClient
    {
        Self::new(config.connect_timeout(), config.handshake_timeout(), config.max_frame_size)
    }

    /// A fresh hidden path for one in-progress download of `filename`. Every call
    /// returns a different path, so concurrent downloads of one name never share a file.
    pub fn partial_path(destination: &Path, filename: &str) -> PathBuf
    {
        destination.join(format!(".{filename}.{}.part", Uuid::new_v4().simple()))
    }

    /// Whether `name` looks like an in-progress download left in a download directory.
    pub fn is_partial_name(name: &str) -> bool
    {
        name.starts_with('.') && name.ends_with(".part")
    }

    /// Pulls `filename` from the transfer server at `address` into `destination`.
    ///
    /// The file only appears under its own name once every announced byte has arrived;
    /// on any failure the partial output is removed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn download(&self, address: SocketAddr, filename: &str, destination: &Path) -> Result<TransferSession, TransferError>
    {
        if !is_safe_filename(filename) {
            return Err(TransferError::InvalidFilename(filename.to_string()));
        }

        let mut stream = match tokio::time::timeout(self.connect_timeout, TcpStream::connect(address)).await {
            Err(_) => return Err(TransferError::Timeout("connection")),
            Ok(Err(error)) => return Err(TransferError::Network(error)),
            Ok(Ok(stream)) => stream,
        };

        write_message(&mut stream, &TransferRequest::Download { filename: filename.to_string() }).await?;
        let reply = tokio::time::timeout(self.handshake_timeout, expect_message::<TransferReply, _>(&mut stream, self.max_frame_size))
            .await
            .map_err(|_| TransferError::Timeout("size response"))??;
        let size = match reply {
            TransferReply::NotFound => return Err(TransferError::FileNotFound(filename.to_string())),
            TransferReply::Found { size } => size,
        };
        debug!("[TRANSFER] {address} offers {filename} ({size} bytes)");

        let final_path = destination.join(filename);
        let partial_path = Self::partial_path(destination, filename);
        let mut session = TransferSession::new(filename, size);

        match self.receive(&mut stream, &partial_path, &mut session).await {
            Ok(()) => {
                tokio::fs::rename(&partial_path, &final_path).await?;
                info!("[TRANSFER] Downloaded {filename} ({size} bytes) from {address}");
                Ok(session)
            }
            Err(error) => {
                let _ = tokio::fs::remove_file(&partial_path).await;
                Err(error)
            }
        }
    }

    async fn receive(&self, stream: &mut TcpStream, partial_path: &Path, session: &mut TransferSession) -> Result<(), TransferError>
    {
        let mut file = File::create(partial_path).await?;
        write_message(stream, &TransferRequest::Ready).await?;

        let mut buffer = vec![0u8; RECEIVE_BUFFER_SIZE];
        while !session.is_complete() {
            let wanted = session.remaining().min(buffer.len() as u64) as usize;
            let read = tokio::time::timeout(self.handshake_timeout, stream.read(&mut buffer[..wanted]))
                .await
                .map_err(|_| TransferError::Timeout("file data"))?
                .map_err(TransferError::Network)?;
            if read == 0 {
                return Err(TransferError::ShortTransfer {
                    received: session.bytes_transferred,
                    expected: session.expected_size,
                });
            }
            file.write_all(&buffer[..read]).await?;
            session.record(read as u64);
        }
        file.flush().await?;
        Ok(())
    }
}
