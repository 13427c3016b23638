//! Place filtering handler

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::api::router::AppState;

/// Filter request body
///
/// A missing body or a missing `amenities` field both mean the empty
/// selection, which matches every place.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FilterPlacesRequest {
    #[serde(default)]
    pub amenities: Vec<AmenityRef>,
}

/// Amenity reference as sent by the front-end checkboxes. Extra fields in
/// the objects are ignored; only `id` matters.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AmenityRef {
    pub id: String,
}

/// Filter places by selected amenities
///
/// Keeps a place iff every selected amenity id is among the place's own
/// amenity ids (subset semantics: the empty selection matches everything,
/// and selecting an amenity a place lacks excludes that place). Unknown
/// amenity ids simply never match. Each retained place is serialized with
/// the `amenities` field stripped.
#[utoipa::path(
    post,
    path = "/100-hbnb/filter_places",
    tag = "Places",
    request_body = FilterPlacesRequest,
    responses(
        (status = 200, description = "Matching places as a JSON array, without the amenities field"),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn filter_places(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    let request: FilterPlacesRequest = if body.is_empty() {
        FilterPlacesRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?
    };

    let places = app.storage.list_places().await?;

    let mut result = Vec::new();
    for place in places {
        let matches = request
            .amenities
            .iter()
            .all(|selected| place.has_amenity(&selected.id));
        if !matches {
            continue;
        }
        let mut value = serde_json::to_value(&place)?;
        if let Some(object) = value.as_object_mut() {
            object.remove("amenities");
        }
        result.push(value);
    }

    Ok(Json(result))
}
