use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::protocol::errors::ProtocolError;

pub const FRAME_HEADER_SIZE: usize = 4;
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16 * 1024 * 1024;

/// Reads one length-prefixed frame.
///
/// Returns `Ok(None)` when the peer closed the stream cleanly between frames.
pub async fn read_frame<R>(reader: &mut R, max_frame_size: u32) -> Result<Option<Vec<u8>>, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; FRAME_HEADER_SIZE];
    let mut filled = 0;
    while filled < FRAME_HEADER_SIZE {
        let read = reader.read(&mut header[filled..]).await?;
        if read == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(ProtocolError::Truncated);
        }
        filled += read;
    }

    let size = u32::from_be_bytes(header);
    if size > max_frame_size {
        return Err(ProtocolError::FrameTooLarge { size: size as u64, max: max_frame_size });
    }

    let mut payload = vec![0u8; size as usize];
    match reader.read_exact(&mut payload).await {
        Ok(_) => Ok(Some(payload)),
        Err(error) if error.kind() == std::io::ErrorKind::UnexpectedEof => Err(ProtocolError::Truncated),
        Err(error) => Err(error.into())
    }
}

pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let size = u32::try_from(payload.len()).map_err(|_| ProtocolError::FrameTooLarge {
        size: payload.len() as u64,
        max: u32::MAX,
    })?;
    writer.write_u32(size).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads one frame and decodes its JSON payload.
pub async fn read_message<T, R>(reader: &mut R, max_frame_size: u32) -> Result<Option<T>, ProtocolError>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    match read_frame(reader, max_frame_size).await? {
        None => Ok(None),
        Some(payload) => Ok(Some(serde_json::from_slice(&payload)?))
    }
}

/// Like [`read_message`], but a closed stream is an error.
pub async fn expect_message<T, R>(reader: &mut R, max_frame_size: u32) -> Result<T, ProtocolError>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    read_message(reader, max_frame_size).await?.ok_or(ProtocolError::ConnectionClosed)
}

pub async fn write_message<T, W>(writer: &mut W, message: &T) -> Result<(), ProtocolError>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let payload = serde_json::to_vec(message)?;
    write_frame(writer, &payload).await
}
