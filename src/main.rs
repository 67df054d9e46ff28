use axum::Router;
use cafe_api::{
    cafes::{
        build_cafes_router,
        interfaces::rest::resources::{
            add_cafe_form_resource::AddCafeFormResource,
            cafe_resource::{CafeEnvelopeResource, CafeListResource, CafeResource},
            error_response_resource::ErrorResponseResource,
            message_response_resource::{ResponseEnvelopeResource, SuccessMessageResource},
        },
    },
    config::app_config::AppConfig,
    shared::{interfaces::rest::openapi::security::ApiKeySecurityAddon, logging::init_tracing},
};
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::home,
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::get_random_cafe,
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::get_all_cafes,
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::find_cafe,
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::post_new_cafe,
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::update_price,
        cafe_api::cafes::interfaces::rest::controllers::cafe_rest_controller::delete_cafe
    ),
    components(
        schemas(
            AddCafeFormResource,
            CafeResource,
            CafeEnvelopeResource,
            CafeListResource,
            ResponseEnvelopeResource,
            SuccessMessageResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "cafes", description = "Cafe listing, search and maintenance")
    ),
    modifiers(&ApiKeySecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(1);
        }
    };

    let cafes_router = build_cafes_router(&config)
        .await
        .expect("failed to build cafes router");

    let app = Router::new()
        .merge(cafes_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("cafe api listening on http://localhost:{}", config.port);
    tracing::info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
