//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::decoding::DocumentFormat;
use crate::errors::AppError;
use crate::models::screening::{ScreeningResult, SkillConfiguration};
use crate::screening::pipeline::screen_text;
use crate::screening::upload::parse_multipart;
use crate::state::AppState;

/// POST /upload
///
/// Multipart upload: `resume` (PDF or DOCX) plus optional `data` (JSON skill
/// configuration). Decodes the document, then runs extraction and scoring.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningResult>, AppError> {
    let request_id = Uuid::new_v4();
    async move {
        let form = parse_multipart(multipart).await?;

        let Some(format) = DocumentFormat::from_mime(&form.file.content_type) else {
            warn!("Rejected {} with type '{}'", form.file.filename, form.file.content_type);
            return Err(AppError::UnsupportedFormat(form.file.content_type));
        };

        let config = SkillConfiguration::from_payload(form.payload);
        info!(
            "Screening {} as {:?} against {} skills",
            form.file.filename,
            format,
            config.skills().len()
        );

        let text = state.decoder.decode(format, form.file.data).await?;
        let result = tokio::task::spawn_blocking(move || screen_text(text, &config))
            .await
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok::<_, AppError>(Json(result))
    }
    .instrument(info_span!("upload", %request_id))
    .await
}
