// SPDX-License-Identifier: MPL-2.0
//! Asynchronous retrieval of image bytes from a record locator.
//!
//! Locators are either `http(s)://` URLs, fetched with `reqwest`, or local
//! files given as `file://` URLs or bare paths, read with `tokio::fs`.
//! Decoding runs on the blocking pool so large images never stall the
//! executor.

use crate::error::{Error, FetchError, Result};
use crate::media::image::{decode_image, ImageData};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// User agent sent with HTTP requests.
const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed for a single image.
const MAX_REDIRECTS: usize = 10;

/// Upper bound on a single HTTP request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the bytes of an image come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Http(String),
    File(PathBuf),
}

impl ImageSource {
    /// Classifies a locator by its scheme.
    ///
    /// `file` URLs are percent-decoded and may name `localhost` as their
    /// host. Anything that does not parse as an absolute URL is a path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnsupportedScheme`] for any scheme other than
    /// `http`, `https` or `file`, and [`FetchError::InvalidLocator`] for a
    /// `file` URL on a remote host.
    pub fn parse(locator: &str) -> Result<Self> {
        let locator = locator.trim();
        let Ok(url) = Url::parse(locator) else {
            return Ok(Self::File(PathBuf::from(locator)));
        };

        match url.scheme() {
            "http" | "https" => Ok(Self::Http(url.into())),
            "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|()| Error::from(FetchError::InvalidLocator(locator.to_string()))),
            // Windows drive letters parse as one-letter schemes
            scheme if scheme.len() == 1 => Ok(Self::File(PathBuf::from(locator))),
            scheme => Err(FetchError::UnsupportedScheme(scheme.to_string()).into()),
        }
    }
}

/// Retrieves the raw bytes behind a source.
pub async fn fetch_bytes(source: &ImageSource) -> Result<Vec<u8>> {
    match source {
        ImageSource::Http(url) => {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()).into());
            }
            Ok(response.bytes().await?.to_vec())
        }
        ImageSource::File(path) => Ok(tokio::fs::read(path).await?),
    }
}

/// Fetches and decodes the image behind `locator`.
pub async fn load(locator: String) -> Result<ImageData> {
    let source = ImageSource::parse(&locator)?;
    tracing::debug!(%locator, "fetching image");

    let bytes = fetch_bytes(&source).await?;
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}
