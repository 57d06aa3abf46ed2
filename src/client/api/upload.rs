//! Image Upload
//!
//! Uploads an already-decoded image as a multipart request and
//! returns the resulting absolute URL.

use super::ApiClient;
use crate::shared::error::ApiError;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Response of `POST /upload`; `url` is relative to the server root
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

impl ApiClient {
    /// Upload image bytes; returns the absolute public URL.
    ///
    /// The backend serves uploads at relative paths, so a relative
    /// `url` in the response is absolutized against the base URL.
    pub async fn upload_image(&self, bytes: Vec<u8>, mime: &str) -> Result<String, ApiError> {
        let ext = mime
            .rsplit('/')
            .next()
            .unwrap_or("bin")
            .replace("jpeg", "jpg");
        let part = Part::bytes(bytes)
            .file_name(format!("upload.{}", ext))
            .mime_str(mime)
            .map_err(ApiError::from)?;
        let form = Form::new().part("file", part);

        let url = self.config().api_url("/upload");
        let builder = self.authed(self.http.post(&url)).await.multipart(form);
        let response = self.execute(builder).await?;
        let body: UploadResponse = response.json().await.map_err(ApiError::from)?;

        if body.url.starts_with("http://") || body.url.starts_with("https://") {
            Ok(body.url)
        } else {
            Ok(format!("{}{}", self.config().server_url(), body.url))
        }
    }
}
