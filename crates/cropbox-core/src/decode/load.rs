//! Asynchronous image loader.

use futures::io::{AsyncRead, AsyncReadExt};
use log::debug;

use super::{decode_image, ImageInfo, LoadError};

/// Read all of `reader` and decode it as an image.
///
/// The future completes only after both stages have finished. It is not
/// retried; dropping it abandons the load.
///
/// # Errors
///
/// Returns `LoadError::Read` if reading fails.
/// Returns `LoadError::Decode` if the bytes are not a decodable image.
pub async fn load_image<R>(mut reader: R) -> Result<ImageInfo, LoadError>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    debug!("Read {} bytes of image data", bytes.len());

    let info = decode_image(&bytes)?;
    Ok(info)
}
