//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{ChatRequestBody, ChatResponse, ErrorResponse, HealthCheck};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::chat::chat,
    ),
    info(
        title = "Helpline API",
        version = "0.1.0",
        description = "Customer support chat. Replies come from a chat model when one is configured, otherwise from a predefined keyword catalogue.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chat", description = "Chat - reply resolution"),
    ),
    components(
        schemas(
            ChatRequestBody,
            ChatResponse,
            ErrorResponse,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;
