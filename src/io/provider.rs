//! Provider seam: the two exchanges the pipeline makes with the remote
//! imagery service, and the response shapes an image submission can come
//! back as.
use std::io::Read;

use bytes::Bytes;

use crate::core::request::ImageRequest;
use crate::error::{Error, Result};
use crate::io::auth::Credential;

/// OAuth2 client-credentials exchange.
pub trait TokenExchange {
    fn exchange_token(&self, client_id: &str, client_secret: &str) -> Result<Credential>;
}

/// Submits an imagery request on behalf of a credential.
pub trait ImageryProvider {
    fn submit(&self, credential: &Credential, request: &ImageRequest) -> Result<ProviderResponse>;
}

/// Byte-bearing shapes a submission may return, depending on how the
/// transport delivered the body.
pub enum ProviderResponse {
    /// Already materialized
    Bytes(Vec<u8>),
    /// Reference-counted binary buffer, copied out in one step
    Binary(Bytes),
    /// Body not yet read; drained on demand
    Streamed(Box<dyn Read + Send>),
    /// Anything that is not image data
    Unsupported { content_type: String },
}

impl ProviderResponse {
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderResponse::Bytes(_) => "bytes",
            ProviderResponse::Binary(_) => "binary",
            ProviderResponse::Streamed(_) => "streamed",
            ProviderResponse::Unsupported { .. } => "unsupported",
        }
    }

    /// Collapse the response into one contiguous byte buffer.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            ProviderResponse::Bytes(buf) => Ok(buf),
            ProviderResponse::Binary(buf) => Ok(buf.to_vec()),
            ProviderResponse::Streamed(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf).map_err(Error::provider)?;
                Ok(buf)
            }
            ProviderResponse::Unsupported { content_type } => {
                Err(Error::UnsupportedResponseType { content_type })
            }
        }
    }
}

impl std::fmt::Debug for ProviderResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderResponse::Bytes(buf) => write!(f, "Bytes({} bytes)", buf.len()),
            ProviderResponse::Binary(buf) => write!(f, "Binary({} bytes)", buf.len()),
            ProviderResponse::Streamed(_) => write!(f, "Streamed(..)"),
            ProviderResponse::Unsupported { content_type } => {
                write!(f, "Unsupported({})", content_type)
            }
        }
    }
}

impl From<Vec<u8>> for ProviderResponse {
    fn from(buf: Vec<u8>) -> Self {
        ProviderResponse::Bytes(buf)
    }
}

impl From<Bytes> for ProviderResponse {
    fn from(buf: Bytes) -> Self {
        ProviderResponse::Binary(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PAYLOAD: &[u8] = b"\x89PNG\r\n\x1a\nfake";

    #[test]
    fn every_byte_shape_collapses_to_the_same_buffer() {
        let shapes = vec![
            ProviderResponse::Bytes(PAYLOAD.to_vec()),
            ProviderResponse::Binary(Bytes::from_static(PAYLOAD)),
            ProviderResponse::Streamed(Box::new(Cursor::new(PAYLOAD.to_vec()))),
        ];
        for shape in shapes {
            let kind = shape.kind();
            assert_eq!(shape.into_bytes().unwrap(), PAYLOAD, "shape {kind}");
        }
    }

    #[test]
    fn unsupported_shape_is_an_error() {
        let err = ProviderResponse::Unsupported {
            content_type: "application/json".into(),
        }
        .into_bytes()
        .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedResponseType { ref content_type } if content_type == "application/json"
        ));
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn stream_failure_is_a_provider_error() {
        let err = ProviderResponse::Streamed(Box::new(BrokenReader))
            .into_bytes()
            .unwrap_err();
        assert!(matches!(err, Error::ProviderRequestFailed(_)));
    }
}
