use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{
    controller::{PaginationParams, SearchParams},
    data::service::ServiceStore,
    document::SectionKey,
    error::{validation::ValidationError, AppError},
    extract::read_form,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::Envelope,
        content::{Attachments, ContentPayload, RemoveItemRequest},
    },
    service::content::ContentService,
    state::AppState,
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

fn content(state: &AppState) -> ContentService<'_, ServiceStore> {
    ContentService::new(&state.db, &state.blobs, &state.default_locale)
}

/// List services at the requested locale.
///
/// Returns a paginated list of services rendered at `lang`, falling back to
/// the default locale per entity when no translation exists. Public.
///
/// # Returns
/// - `200 OK` - Page of rendered services with pagination facts
/// - `404 Not Found` - The requested page is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/services/{lang}",
    tag = SERVICE_TAG,
    params(
        ("lang" = String, Path, description = "Requested locale tag"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of services", body = Envelope),
        (status = 404, description = "No services on this page", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn list_services(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (items, pagination) = content(&state)
        .list(&lang, params.page, params.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::page(Value::Array(items), pagination)),
    ))
}

/// Search services by heading.
///
/// Case-insensitive substring search over the main heading of the
/// translation at `lang`. Public.
///
/// # Returns
/// - `200 OK` - Page of matching services
/// - `404 Not Found` - No matches
/// - `422 Unprocessable Entity` - Empty query
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/services/search/{lang}",
    tag = SERVICE_TAG,
    params(
        ("lang" = String, Path, description = "Requested locale tag"),
        ("query" = String, Query, description = "Search needle"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of matching services", body = Envelope),
        (status = 404, description = "No matches", body = Envelope),
        (status = 422, description = "Empty query", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn search_services(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let (items, pagination) = content(&state)
        .search(&lang, &params.query, params.page, params.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::page(Value::Array(items), pagination)),
    ))
}

/// Get one service at the requested locale.
///
/// # Returns
/// - `200 OK` - Rendered service detail
/// - `404 Not Found` - Unknown service id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/services/show/{id}/{lang}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service id"),
        ("lang" = String, Path, description = "Requested locale tag")
    ),
    responses(
        (status = 200, description = "Rendered service detail", body = Envelope),
        (status = 404, description = "Service not found", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path((id, lang)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let item = content(&state).get(id, &lang).await?;

    Ok((StatusCode::OK, Json(Envelope::data(item))))
}

/// Create a service with its first translation.
///
/// Multipart form: a `payload` JSON part (category and translation blob)
/// plus an `image` file part and optional `<section>.<index>.image` parts.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - Created, body carries the new id
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Validation failure
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/services/store/{lang}",
    tag = SERVICE_TAG,
    params(
        ("lang" = String, Path, description = "Locale of the submitted translation")
    ),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Service created", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 422, description = "Validation failure", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth.as_ref(), &headers).require(&[Permission::SuperAdmin])?;

    let form = read_form(&mut multipart).await?;
    let payload: ContentPayload = form.payload_as()?;
    let attachments = Attachments::from_files(form.files);

    let id = content(&state).create(&lang, payload, attachments).await?;

    Ok((StatusCode::OK, Json(Envelope::data(json!({ "id": id })))))
}

/// Update a service and the translation at `lang`.
///
/// Same multipart shape as create; the entity image is optional here.
/// Section images carry forward from the default locale's document when no
/// new file is uploaded for a slot.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - Updated
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown service id
/// - `422 Unprocessable Entity` - Validation failure
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/services/update/{id}/{lang}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service id"),
        ("lang" = String, Path, description = "Locale of the submitted translation")
    ),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Service updated", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 404, description = "Service not found", body = Envelope),
        (status = 422, description = "Validation failure", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path((id, lang)): Path<(i32, String)>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth.as_ref(), &headers).require(&[Permission::SuperAdmin])?;

    let form = read_form(&mut multipart).await?;
    let payload: ContentPayload = form.payload_as()?;
    let attachments = Attachments::from_files(form.files);

    content(&state).update(id, &lang, payload, attachments).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message("Service updated successfully.")),
    ))
}

/// Delete a service, its translations and its stored image.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - Deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown service id
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    delete,
    path = "/api/services/delete/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service id")
    ),
    responses(
        (status = 200, description = "Service deleted", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 404, description = "Service not found", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth.as_ref(), &headers).require(&[Permission::SuperAdmin])?;

    content(&state).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message("Service deleted successfully.")),
    ))
}

/// Remove a section item from every locale of a service.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - Item removed from all locales holding it
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No translations, or no locale holds the item
/// - `422 Unprocessable Entity` - Unknown section name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/services/remove-item",
    tag = SERVICE_TAG,
    request_body = RemoveItemRequest,
    responses(
        (status = 200, description = "Item removed", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 404, description = "Item not present in any locale", body = Envelope),
        (status = 422, description = "Unknown section name", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn remove_service_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RemoveItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth.as_ref(), &headers).require(&[Permission::SuperAdmin])?;

    let section = parse_section(&request.section)?;
    content(&state)
        .remove_section_item(request.id, section, request.index)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message("Item removed successfully.")),
    ))
}

pub(crate) fn parse_section(name: &str) -> Result<SectionKey, AppError> {
    SectionKey::parse(name).ok_or_else(|| {
        let mut validation = ValidationError::new();
        validation.push("section", format!("Unknown section '{name}'."));
        AppError::ValidationErr(validation)
    })
}
