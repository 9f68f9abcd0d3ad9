//! Image retrieval: submit the request and collapse whatever the provider
//! hands back into one contiguous byte buffer.
use tracing::{debug, info};

use crate::core::request::ImageRequest;
use crate::error::{Error, Result};
use crate::io::auth::Credential;
use crate::io::provider::ImageryProvider;

pub fn fetch_image<P>(provider: &P, credential: &Credential, request: &ImageRequest) -> Result<Vec<u8>>
where
    P: ImageryProvider + ?Sized,
{
    info!(
        "Requesting {}x{} {:?} from {} ({})",
        request.width, request.height, request.format, request.params.collection, request.params.algorithm
    );
    let response = provider.submit(credential, request)?;
    debug!("Provider returned {:?}", response);

    let bytes = response.into_bytes()?;
    if bytes.is_empty() {
        return Err(Error::EmptyResponse);
    }
    info!("Received {} bytes", bytes.len());
    Ok(bytes)
}
