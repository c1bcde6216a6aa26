//! Default [`Transport`] on top of `reqwest`.

use anyhow::Context;
use async_trait::async_trait;
use clap::crate_version;
use reqwest::{
    header,
    header::{HeaderMap, HeaderValue},
    multipart::{Form, Part},
};
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use crate::{
    prelude::*,
    result,
    transport::{FormPart, Payload, Transport},
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client() -> Result<ClientWithMiddleware> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("tgbotapi / ", crate_version!(), " (Rust)")),
    );
    let client = reqwest::Client::builder()
        .gzip(true)
        .use_rustls_tls()
        .default_headers(headers)
        .timeout(DEFAULT_TIMEOUT)
        .pool_idle_timeout(Some(Duration::from_secs(600)))
        .build()
        .context("failed to build an HTTP client")?;
    Ok(reqwest_middleware::ClientBuilder::new(client).build())
}

#[must_use]
#[derive(Clone)]
pub struct HttpTransport(pub ClientWithMiddleware);

impl HttpTransport {
    pub fn new() -> Result<Self> {
        build_client().map(Self)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all)]
    async fn post(&self, url: Url, payload: Payload, timeout: Duration) -> Result<Value> {
        let request = self.0.post(url).timeout(timeout);
        let request = if payload.is_multipart() {
            debug!(n_uploads = payload.uploads.len(), "Sending multipart form…");
            request.multipart(into_form(payload)?)
        } else {
            request.json(&payload.fields)
        };
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, n_bytes = body.len(), "Received response");
        result::parse(status, &body)
    }

    #[instrument(skip_all)]
    async fn get(&self, url: Url, timeout: Duration) -> Result<Vec<u8>> {
        let body = self.0.get(url).timeout(timeout).send().await?.error_for_status()?.bytes().await?;
        debug!(n_bytes = body.len(), "Downloaded");
        Ok(body.to_vec())
    }
}

fn into_form(payload: Payload) -> Result<Form> {
    payload.into_parts()?.into_iter().try_fold(Form::new(), |form, (name, part)| {
        let form = match part {
            FormPart::Text(text) => form.text(name, text),
            FormPart::File(upload) => {
                let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
                if let Some(mime_type) = upload.mime_type {
                    part = part.mime_str(&mime_type)?;
                }
                form.part(name, part)
            }
        };
        Ok::<_, Error>(form)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::InputFileUpload;

    #[test]
    fn build_client_ok() -> Result {
        HttpTransport::new().map(|_| ())
    }

    #[test]
    fn invalid_mime_type_fails() {
        let payload = Payload {
            fields: Map::new(),
            uploads: vec![InputFileUpload::new("a.bin", vec![0]).with_mime_type("not a mime type")],
        };
        assert!(into_form(payload).is_err());
    }
}
