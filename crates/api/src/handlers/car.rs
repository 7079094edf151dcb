//! Handlers for the `/cars` resource.
//!
//! Create and edit accept a multipart form: the descriptive text fields,
//! two price fields, and an optional `photo` file part. Edit is a full
//! replace -- omitted form fields become empty strings (prices become null),
//! never "unchanged". An upload with a non-allow-listed extension is
//! silently ignored; the rest of the form still applies.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use carkat_core::error::CoreError;
use carkat_core::price::parse_price;
use carkat_core::types::DbId;
use carkat_core::uploads::{allowed_photo_extension, generated_photo_filename};
use carkat_db::models::car::{Car, CarFields};
use carkat_db::repositories::CarRepo;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// An uploaded photo part, prior to extension screening.
struct UploadedPhoto {
    filename: String,
    data: Vec<u8>,
}

/// A parsed car form: the replace-set of fields plus an optional photo.
struct CarForm {
    fields: CarFields,
    photo: Option<UploadedPhoto>,
}

/// POST /api/v1/cars
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Car>>)> {
    let form = read_car_form(multipart).await?;
    let mut car = CarRepo::create(&state.pool, &form.fields).await?;

    if let Some(filename) = store_photo(&state.config, form.photo).await? {
        if let Some(updated) = CarRepo::set_photo(&state.pool, car.id, &filename).await? {
            car = updated;
        }
    }

    tracing::info!(id = car.id, brand = %car.brand, model = %car.model, "Car created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: car })))
}

/// GET /api/v1/cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Car>>> {
    let car = CarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Car", id }))?;
    Ok(Json(DataResponse { data: car }))
}

/// PUT /api/v1/cars/{id}
///
/// Full-replace edit. Last write wins; concurrent edits are not guarded by
/// a version check.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Car>>> {
    let form = read_car_form(multipart).await?;
    let mut car = CarRepo::update(&state.pool, id, &form.fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Car", id }))?;

    if let Some(filename) = store_photo(&state.config, form.photo).await? {
        if let Some(updated) = CarRepo::set_photo(&state.pool, id, &filename).await? {
            car = updated;
        }
    }

    Ok(Json(DataResponse { data: car }))
}

/// DELETE /api/v1/cars/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CarRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Car", id }))
    }
}

// ---------------------------------------------------------------------------
// Form parsing
// ---------------------------------------------------------------------------

/// Read the multipart car form into a [`CarForm`].
///
/// Unknown parts are ignored. Text fields are trimmed; price fields that do
/// not parse as a plain non-negative number become null.
async fn read_car_form(mut multipart: Multipart) -> Result<CarForm, AppError> {
    let mut fields = CarFields::default();
    let mut photo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "photo" {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !filename.is_empty() && !data.is_empty() {
                photo = Some(UploadedPhoto {
                    filename,
                    data: data.to_vec(),
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            apply_text_field(&mut fields, &name, text.trim());
        }
    }

    Ok(CarForm { fields, photo })
}

/// Copy one named form value onto the field struct.
fn apply_text_field(fields: &mut CarFields, name: &str, value: &str) {
    match name {
        "brand" => fields.brand = value.to_string(),
        "model" => fields.model = value.to_string(),
        "generation" => fields.generation = value.to_string(),
        "body" => fields.body = value.to_string(),
        "engines" => fields.engines = value.to_string(),
        "drive" => fields.drive = value.to_string(),
        "car_class" => fields.car_class = value.to_string(),
        "years" => fields.years = value.to_string(),
        "country" => fields.country = value.to_string(),
        "weak_points" => fields.weak_points = value.to_string(),
        "price_min" => fields.price_min = parse_price(value),
        "price_max" => fields.price_max = parse_price(value),
        _ => {} // ignore unknown fields
    }
}

// ---------------------------------------------------------------------------
// Photo storage
// ---------------------------------------------------------------------------

/// Store an accepted photo under a generated name, returning that name.
///
/// Returns `Ok(None)` when there is no photo or its extension is not
/// allow-listed -- the upload is ignored and the record keeps its existing
/// photo reference.
async fn store_photo(
    config: &ServerConfig,
    photo: Option<UploadedPhoto>,
) -> Result<Option<String>, AppError> {
    let Some(photo) = photo else {
        return Ok(None);
    };
    let Some(ext) = allowed_photo_extension(&photo.filename) else {
        tracing::debug!(filename = %photo.filename, "Ignoring upload with disallowed extension");
        return Ok(None);
    };

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored_filename = generated_photo_filename(&ext);
    let path = config.upload_dir.join(&stored_filename);
    tokio::fs::write(&path, &photo.data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(Some(stored_filename))
}
