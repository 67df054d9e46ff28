use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::cafes::{
    domain::{
        model::{
            commands::{
                create_cafe_command::{CreateCafeCommand, CreateCafeCommandParts},
                delete_cafe_command::DeleteCafeCommand,
                update_cafe_price_command::UpdateCafePriceCommand,
            },
            enums::cafe_domain_error::CafeDomainError,
            queries::search_cafes_by_location_query::SearchCafesByLocationQuery,
        },
        services::{
            cafe_command_service::CafeCommandService, cafe_query_service::CafeQueryService,
        },
    },
    interfaces::rest::{
        extractors::add_cafe_form_extractor::AddCafeFormPayload,
        resources::{
            add_cafe_form_resource::AddCafeFormResource,
            cafe_query_params_resource::{
                ReportClosedQueryResource, SearchCafesQueryResource, UpdatePriceQueryResource,
            },
            cafe_resource::{CafeEnvelopeResource, CafeListResource, CafeResource},
            error_response_resource::ErrorResponseResource,
            message_response_resource::{ResponseEnvelopeResource, SuccessMessageResource},
        },
    },
};

const HOME_PAGE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html"));

type CafeApiError = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct CafeRestControllerState {
    pub command_service: Arc<dyn CafeCommandService>,
    pub query_service: Arc<dyn CafeQueryService>,
    pub secret_api_key: Arc<str>,
}

pub fn router(state: CafeRestControllerState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/random", get(get_random_cafe))
        .route("/all", get(get_all_cafes))
        .route("/search", get(find_cafe))
        .route("/add", post(post_new_cafe))
        .route("/update-price/:cafe_id", patch(update_price))
        .route("/report-closed/:cafe_id", delete(delete_cafe))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "cafes",
    responses((status = 200, description = "Landing page", body = String, content_type = "text/html"))
)]
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

#[utoipa::path(
    get,
    path = "/random",
    tag = "cafes",
    responses(
        (status = 200, description = "A randomly chosen cafe", body = CafeEnvelopeResource),
        (status = 404, description = "No cafes stored", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn get_random_cafe(
    State(state): State<CafeRestControllerState>,
) -> Result<Json<CafeEnvelopeResource>, CafeApiError> {
    let cafe = state
        .query_service
        .handle_random()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CafeEnvelopeResource {
        cafe: CafeResource::from(cafe),
    }))
}

#[utoipa::path(
    get,
    path = "/all",
    tag = "cafes",
    responses(
        (status = 200, description = "Every stored cafe", body = CafeListResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn get_all_cafes(
    State(state): State<CafeRestControllerState>,
) -> Result<Json<CafeListResource>, CafeApiError> {
    let cafes = state
        .query_service
        .handle_list_all()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CafeListResource {
        cafes: cafes.into_iter().map(CafeResource::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "cafes",
    params(("loc" = Option<String>, Query, description = "Case-insensitive location substring")),
    responses(
        (status = 200, description = "Cafes at the location", body = CafeListResource),
        (status = 404, description = "No cafe at that location", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn find_cafe(
    State(state): State<CafeRestControllerState>,
    Query(query): Query<SearchCafesQueryResource>,
) -> Result<Json<CafeListResource>, CafeApiError> {
    let cafes = state
        .query_service
        .handle_search_by_location(SearchCafesByLocationQuery::new(query.loc))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CafeListResource {
        cafes: cafes.into_iter().map(CafeResource::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/add",
    tag = "cafes",
    request_body(
        content(
            (AddCafeFormResource = "application/x-www-form-urlencoded"),
            (AddCafeFormResource = "multipart/form-data")
        )
    ),
    responses(
        (status = 201, description = "Cafe added", body = ResponseEnvelopeResource),
        (status = 400, description = "Invalid or missing field", body = ErrorResponseResource),
        (status = 415, description = "Body is not a form", body = ErrorResponseResource),
        (status = 409, description = "Cafe name already taken", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn post_new_cafe(
    State(state): State<CafeRestControllerState>,
    AddCafeFormPayload(form): AddCafeFormPayload,
) -> Result<(StatusCode, Json<ResponseEnvelopeResource>), CafeApiError> {
    if let Err(validation_error) = form.validate() {
        return Err(map_domain_error(CafeDomainError::InvalidField(
            validation_error.to_string(),
        )));
    }

    let command = CreateCafeCommand::new(CreateCafeCommandParts::from(form));

    state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseEnvelopeResource::success(
            "Successfully added the new cafe.",
        )),
    ))
}

#[utoipa::path(
    patch,
    path = "/update-price/{cafe_id}",
    tag = "cafes",
    params(
        ("cafe_id" = i32, Path, description = "Cafe identifier"),
        ("new-price" = Option<String>, Query, description = "New coffee price; omitted clears it")
    ),
    responses(
        (status = 200, description = "Price updated", body = SuccessMessageResource),
        (status = 404, description = "Cafe not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn update_price(
    State(state): State<CafeRestControllerState>,
    Path(cafe_id): Path<String>,
    Query(query): Query<UpdatePriceQueryResource>,
) -> Result<Json<SuccessMessageResource>, CafeApiError> {
    let command =
        UpdateCafePriceCommand::new(cafe_id, query.new_price).map_err(map_price_update_error)?;

    state
        .command_service
        .handle_update_price(command)
        .await
        .map_err(map_price_update_error)?;

    Ok(Json(SuccessMessageResource {
        success: "Successfully updated the price.".to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/report-closed/{cafe_id}",
    tag = "cafes",
    params(
        ("cafe_id" = i32, Path, description = "Cafe identifier"),
        ("api-key" = String, Query, description = "Shared secret authorizing deletion")
    ),
    security(("apiKey" = [])),
    responses(
        (status = 200, description = "Cafe deleted", body = ResponseEnvelopeResource),
        (status = 403, description = "Wrong or missing api key", body = ErrorResponseResource),
        (status = 404, description = "Cafe not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_cafe(
    State(state): State<CafeRestControllerState>,
    Path(cafe_id): Path<String>,
    Query(query): Query<ReportClosedQueryResource>,
) -> Result<Json<ResponseEnvelopeResource>, CafeApiError> {
    if query.api_key.as_deref() != Some(&*state.secret_api_key) {
        tracing::warn!(cafe_id = %cafe_id, "rejected cafe deletion with wrong api key");
        return Err(map_domain_error(CafeDomainError::Forbidden));
    }

    let command = DeleteCafeCommand::new(cafe_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ResponseEnvelopeResource::success(
        "Successfully deleted the cafe from the database.",
    )))
}

/// The price endpoint has always answered a missing cafe without the trailing period.
fn map_price_update_error(error: CafeDomainError) -> CafeApiError {
    match error {
        CafeDomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponseResource::error(
                "Not Found",
                "Sorry a cafe with that id was not found in the database",
            )),
        ),
        other => map_domain_error(other),
    }
}

fn map_domain_error(error: CafeDomainError) -> CafeApiError {
    let message = error.to_string();

    match error {
        CafeDomainError::DuplicateName => (
            StatusCode::CONFLICT,
            Json(ErrorResponseResource::rejected(message)),
        ),
        CafeDomainError::MissingRequiredField | CafeDomainError::InvalidField(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::rejected(message)),
        ),
        CafeDomainError::NotFound
        | CafeDomainError::NoLocationMatch
        | CafeDomainError::EmptyTable => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponseResource::error("Not Found", message)),
        ),
        CafeDomainError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponseResource::error("Forbidden", message)),
        ),
        CafeDomainError::InfrastructureError(_) => {
            tracing::error!(error = %message, "cafe request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseResource::error(
                    "Internal Server Error",
                    "Sorry, something went wrong while talking to the database.",
                )),
            )
        }
    }
}
