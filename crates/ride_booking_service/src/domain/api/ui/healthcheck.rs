use actix_web::{get, web::Json};

use crate::{domain::types::ui::booking::ResponseData, tools::error::AppError};

#[get("/healthcheck")]
async fn health_check() -> Result<Json<ResponseData>, AppError> {
    Ok(Json(ResponseData {
        result: "Service Is Up".to_string(),
    }))
}
