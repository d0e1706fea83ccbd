use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{
    controller::{service::parse_section, PaginationParams, SearchParams},
    data::team::TeamStore,
    error::AppError,
    extract::read_form,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::Envelope,
        content::{Attachments, ContentPayload, RemoveItemRequest, ReorderRequest},
    },
    service::content::ContentService,
    state::AppState,
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

fn content(state: &AppState) -> ContentService<'_, TeamStore> {
    ContentService::new(&state.db, &state.blobs, &state.default_locale)
}

/// List team members at the requested locale. Public.
#[utoipa::path(
    get,
    path = "/api/teams/{lang}",
    tag = TEAM_TAG,
    params(
        ("lang" = String, Path, description = "Requested locale tag"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of team members", body = Envelope),
        (status = 404, description = "No team members on this page", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn list_team_members(
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

/// Search team members by name. Public.
#[utoipa::path(
    get,
    path = "/api/teams/search/{lang}",
    tag = TEAM_TAG,
    params(
        ("lang" = String, Path, description = "Requested locale tag"),
        ("query" = String, Query, description = "Search needle"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of matching team members", body = Envelope),
        (status = 404, description = "No matches", body = Envelope),
        (status = 422, description = "Empty query", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn search_team_members(
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

/// Get one team member at the requested locale. Public.
#[utoipa::path(
    get,
    path = "/api/teams/show/{id}/{lang}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team member id"),
        ("lang" = String, Path, description = "Requested locale tag")
    ),
    responses(
        (status = 200, description = "Rendered team member detail", body = Envelope),
        (status = 404, description = "Team member not found", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn get_team_member(
    State(state): State<AppState>,
    Path((id, lang)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let item = content(&state).get(id, &lang).await?;

    Ok((StatusCode::OK, Json(Envelope::data(item))))
}

/// Create a team member with its first translation. Super admin only.
#[utoipa::path(
    post,
    path = "/api/teams/store/{lang}",
    tag = TEAM_TAG,
    params(
        ("lang" = String, Path, description = "Locale of the submitted translation")
    ),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Team member created", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 422, description = "Validation failure", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn create_team_member(
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

/// Update a team member and the translation at `lang`. Super admin only.
#[utoipa::path(
    post,
    path = "/api/teams/update/{id}/{lang}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team member id"),
        ("lang" = String, Path, description = "Locale of the submitted translation")
    ),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Team member updated", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 404, description = "Team member not found", body = Envelope),
        (status = 422, description = "Validation failure", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn update_team_member(
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
        Json(Envelope::message("Team member updated successfully.")),
    ))
}

/// Delete a team member, its translations and its stored image. Super
/// admin only.
#[utoipa::path(
    delete,
    path = "/api/teams/delete/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team member id")
    ),
    responses(
        (status = 200, description = "Team member deleted", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 404, description = "Team member not found", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth.as_ref(), &headers).require(&[Permission::SuperAdmin])?;

    content(&state).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message("Team member deleted successfully.")),
    ))
}

/// Remove a section item from every locale of a team member. Super admin
/// only.
#[utoipa::path(
    post,
    path = "/api/teams/remove-item",
    tag = TEAM_TAG,
    request_body = RemoveItemRequest,
    responses(
        (status = 200, description = "Item removed", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 404, description = "Item not present in any locale", body = Envelope),
        (status = 422, description = "Unknown section name", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn remove_team_member_item(
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

/// Reassign team member display positions in bulk. Super admin only.
#[utoipa::path(
    post,
    path = "/api/teams/reorder",
    tag = TEAM_TAG,
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Team order updated", body = Envelope),
        (status = 401, description = "Missing or invalid token", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn reorder_team_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ReorderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth.as_ref(), &headers).require(&[Permission::SuperAdmin])?;

    let orders: Vec<(i32, i32)> = request
        .orders
        .iter()
        .map(|entry| (entry.id, entry.order_number))
        .collect();
    content(&state).reorder(&orders).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message("Team order updated successfully.")),
    ))
}
