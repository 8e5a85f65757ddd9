use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::errors::ErrorResponse;
use crate::api::handlers::{health::HealthResponse, upload::UploadVideoForm};
use crate::application::dto::{ListVideosResponse, UploadVideoResponse, VideoItem};

/// OpenAPI specification for the video API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Blob API",
        version = "1.0.0",
        description = "Upload videos to Azure Blob Storage and list what has been uploaded"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::list::list_handler,
        crate::api::handlers::upload::upload_handler,
    ),
    components(
        schemas(
            VideoItem,
            ListVideosResponse,
            UploadVideoResponse,
            UploadVideoForm,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "videos", description = "Video upload and listing")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
