use std::sync::Arc;

use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use storage::Database;
use web::auth::{HttpIdentityProvider, SharedIdentityProvider};
use web::config::Config;
use web::middleware::cors::AllowedOrigins;
use web::{AppState, app};

#[derive(OpenApi)]
#[openapi(
    paths(
        web::features::auth::handlers::sign_up,
        web::features::auth::handlers::confirm_sign_up,
        web::features::auth::handlers::sign_in,
        web::features::auth::handlers::refresh_token,
        web::features::workouts::handlers::list_workouts,
        web::features::workouts::handlers::get_workout,
        web::features::workouts::handlers::create_workout,
        web::features::workouts::handlers::update_workout,
        web::features::workouts::handlers::delete_workout,
        web::features::workouts::handlers::list_workout_exercises,
        web::features::workouts::handlers::add_exercise_to_workout,
        web::features::workouts::handlers::remove_exercise_from_workout,
        web::features::exercises::handlers::list_exercises,
        web::features::exercises::handlers::get_exercise,
        web::features::exercises::handlers::list_exercises_by_name,
        web::features::exercises::handlers::list_exercises_by_type,
        web::features::exercises::handlers::create_exercise,
        web::features::exercises::handlers::update_exercise,
        web::features::exercises::handlers::delete_exercise,
    ),
    components(
        schemas(
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::workout::WorkoutResponse,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::UpdateExerciseRequest,
            storage::dto::exercise::ExerciseResponse,
            storage::models::Workout,
            storage::models::Exercise,
            web::auth::TokenSet,
            web::features::auth::handlers::SignUpRequest,
            web::features::auth::handlers::ConfirmSignUpRequest,
            web::features::auth::handlers::SignInRequest,
            web::features::auth::handlers::RefreshTokenRequest,
        )
    ),
    tags(
        (name = "auth", description = "Identity provider endpoints"),
        (name = "workouts", description = "Per-user workout endpoints"),
        (name = "exercises", description = "Per-user catalog exercise endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Access token")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Gym Tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let provider: SharedIdentityProvider = Arc::new(HttpIdentityProvider::new(
        config.identity_provider_url.clone(),
        config.identity_client_id.clone(),
    ));
    let origins = AllowedOrigins::from_comma_separated(&config.cors_allowed_origins);

    let state = AppState {
        db,
        provider,
        origins,
    };

    let bind_address = format!("{}:{}", config.host, config.port);

    let router = app(state).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, router).await?;

    Ok(())
}
