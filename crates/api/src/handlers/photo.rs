//! Handler for uploading a photo for a pet.
//!
//! The multipart body may carry a `photo-file` field. No file means no
//! upload and no record; the handler just redirects. A storage or
//! persistence failure is logged with its distinguishing variant and
//! swallowed, so the caller always sees the same redirect. Tests cover
//! both failure modes.

use axum::extract::{Multipart, Path, State};
use axum::response::Redirect;
use petbook_core::naming::photo_key;
use petbook_core::types::DbId;
use petbook_db::models::photo::Photo;
use petbook_db::repositories::PhotoRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::redirect_to_pet;
use crate::state::AppState;

/// Multipart field name carrying the uploaded photo.
const PHOTO_FIELD: &str = "photo-file";

/// POST /api/v1/pets/{pet_id}/photos
pub async fn upload(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(PHOTO_FIELD) {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
        }
        // Other fields are ignored.
    }

    if let Some((filename, bytes)) = file {
        let key = photo_key(&filename);
        match store_photo(&state, pet_id, &key, bytes).await {
            Ok(photo) => {
                tracing::info!(pet_id, photo_id = photo.id, key, "Photo stored");
            }
            Err(err) => {
                tracing::error!(pet_id, key, error = %err, "Photo upload failed");
            }
        }
    }

    Ok(redirect_to_pet(pet_id))
}

/// Upload the bytes and persist the photo row. A failure in either step
/// leaves no record behind.
async fn store_photo(
    state: &AppState,
    pet_id: DbId,
    key: &str,
    bytes: Vec<u8>,
) -> AppResult<Photo> {
    state.storage.put_object(key, bytes).await?;
    let url = state.storage.public_url(key);
    let photo = PhotoRepo::create(&state.pool, pet_id, &url).await?;
    Ok(photo)
}
