use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use epias_client::EpiasError;
use log::warn;
use serde_json::{json, Value};

use crate::domain::error::PlanningError;
use crate::tools::{ToolError, ToolRegistry};

impl ResponseError for ToolError {
    fn status_code(&self) -> StatusCode {
        match self {
            ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
            ToolError::InvalidArguments { .. } => StatusCode::BAD_REQUEST,
            ToolError::Planning(PlanningError::Validation(_)) => StatusCode::BAD_REQUEST,
            ToolError::Planning(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ToolError::Transport(EpiasError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            ToolError::Transport(_) => StatusCode::BAD_GATEWAY,
            ToolError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ToolError::Encode(_) | ToolError::Aborted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// JSON extractor settings; malformed or oversized bodies answer 400 with `{"error": ...}`.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({ "error": err_string })),
            )
            .into()
        })
}

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// GET /tools
pub async fn list_tools(registry: web::Data<ToolRegistry>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "solver": registry.solver_name(),
        "tools": registry.specs(),
    }))
}

/// POST /tools/{name}
pub async fn invoke_tool(
    registry: web::Data<ToolRegistry>,
    name: web::Path<String>,
    args: web::Json<Value>,
) -> Result<HttpResponse, ToolError> {
    let name = name.into_inner();
    match registry.invoke(&name, args.into_inner()).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(err) => {
            warn!("tool {} failed: {}", name, err);
            Err(err)
        }
    }
}

/// Register every route; the caller supplies `web::Data<ToolRegistry>` and the JSON config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/", "/tools"))
        .route("/health", web::get().to(health_check))
        .route("/tools", web::get().to(list_tools))
        .route("/tools/{name}", web::post().to(invoke_tool));
}
