use axum::body::StreamBody;
use axum::extract::{Multipart, State};
use axum::response::{AppendHeaders, IntoResponse};
use axum::routing::post;
use axum::Router;
use common::error::RelayError;
use common::models::{SourceFile, TargetFormat};
use reqwest::header;

use crate::error::ApiError;
use crate::state::Services;

pub fn create_route(services: Services) -> Router {
    Router::new().route("/convert", post(convert)).with_state(services)
}

#[tracing::instrument(skip(services, multipart))]
pub async fn convert(State(services): State<Services>, multipart: Multipart) -> Result<impl IntoResponse, ApiError> {
    let (source, target) = read_upload(multipart).await?;
    let converted = services.convert_service.convert(source, target).await?;

    let headers = AppendHeaders([
        (header::CONTENT_TYPE, mime::APPLICATION_OCTET_STREAM.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", converted.file_name),
        ),
    ]);
    Ok((headers, StreamBody::new(converted.download.bytes_stream())))
}

async fn read_upload(mut multipart: Multipart) -> Result<(SourceFile, TargetFormat), RelayError> {
    let mut target: Option<String> = None;
    let mut source: Option<SourceFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| RelayError::Validation(err.to_string()))?
    {
        match field.name() {
            Some("target") => {
                let value = field.text().await.map_err(|err| RelayError::Validation(err.to_string()))?;
                target = Some(value);
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or(mime::APPLICATION_OCTET_STREAM.as_ref())
                    .to_string();
                let bytes = field.bytes().await.map_err(|err| RelayError::Validation(err.to_string()))?;
                source = Some(SourceFile { bytes, file_name, mime_type });
            }
            _ => {}
        }
    }

    let target = target
        .unwrap_or_default()
        .parse::<TargetFormat>()
        .map_err(RelayError::Validation)?;
    let source = source.ok_or_else(|| RelayError::Validation("missing file".to_string()))?;
    Ok((source, target))
}
