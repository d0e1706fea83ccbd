use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{booking, service, team},
    model::{
        api::{Envelope, Pagination},
        booking::BookingRequest,
        content::{ContentPayload, OrderAssignment, RemoveItemRequest, ReorderRequest},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        service::list_services,
        service::search_services,
        service::get_service,
        service::create_service,
        service::update_service,
        service::delete_service,
        service::remove_service_item,
        team::list_team_members,
        team::search_team_members,
        team::get_team_member,
        team::create_team_member,
        team::update_team_member,
        team::delete_team_member,
        team::remove_team_member_item,
        team::reorder_team_members,
        booking::submit_booking,
    ),
    components(schemas(
        Envelope,
        Pagination,
        ContentPayload,
        RemoveItemRequest,
        ReorderRequest,
        OrderAssignment,
        BookingRequest
    )),
    tags(
        (name = "service", description = "Localized service content"),
        (name = "team", description = "Localized team member content"),
        (name = "booking", description = "Meeting booking requests")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/services/{lang}", get(service::list_services))
        .route("/api/services/search/{lang}", get(service::search_services))
        .route("/api/services/show/{id}/{lang}", get(service::get_service))
        .route("/api/services/store/{lang}", post(service::create_service))
        .route(
            "/api/services/update/{id}/{lang}",
            post(service::update_service),
        )
        .route("/api/services/delete/{id}", delete(service::delete_service))
        .route(
            "/api/services/remove-item",
            post(service::remove_service_item),
        )
        .route("/api/teams/{lang}", get(team::list_team_members))
        .route("/api/teams/search/{lang}", get(team::search_team_members))
        .route("/api/teams/show/{id}/{lang}", get(team::get_team_member))
        .route("/api/teams/store/{lang}", post(team::create_team_member))
        .route(
            "/api/teams/update/{id}/{lang}",
            post(team::update_team_member),
        )
        .route("/api/teams/delete/{id}", delete(team::delete_team_member))
        .route("/api/teams/remove-item", post(team::remove_team_member_item))
        .route("/api/teams/reorder", post(team::reorder_team_members))
        .route("/api/bookings/{lang}", post(booking::submit_booking))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
