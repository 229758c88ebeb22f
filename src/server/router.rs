use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        inscription::{self, INSCRIPTION_TAG},
        periode::{self, PERIODE_TAG},
        selection::{self, SELECTION_TAG},
        session::{self, SESSION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tahwisa API",
        description = "Seasonal vacation registration and selection lottery"
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = INSCRIPTION_TAG, description = "Employee registrations to sessions"),
        (name = SELECTION_TAG, description = "Selection lottery and its results"),
        (name = PERIODE_TAG, description = "Registration periods"),
        (name = SESSION_TAG, description = "Sessions at destinations")
    )
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by every endpoint.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with its OpenAPI document served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            inscription::create_inscription,
            inscription::get_inscriptions
        ))
        .routes(routes!(
            inscription::get_inscription_by_id,
            inscription::update_inscription,
            inscription::delete_inscription
        ))
        .routes(routes!(inscription::get_inscriptions_by_employee))
        .routes(routes!(inscription::get_inscriptions_by_session))
        .routes(routes!(selection::generate_selection))
        .routes(routes!(selection::run_sweep))
        .routes(routes!(
            selection::get_selection_results,
            selection::create_selection_result
        ))
        .routes(routes!(
            selection::get_selection_result_by_id,
            selection::update_selection_result,
            selection::delete_selection_result
        ))
        .routes(routes!(selection::get_selection_results_by_session))
        .routes(routes!(selection::get_selection_results_by_employee))
        .routes(routes!(periode::create_periode))
        .routes(routes!(periode::get_registration_status))
        .routes(routes!(session::create_session))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
