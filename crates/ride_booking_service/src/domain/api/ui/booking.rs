use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    domain::{action::ui::booking, types::ui::booking::RideBookingRequest},
    environment::AppState,
    tools::error::AppError,
};

#[post("/ui/ride/book")]
async fn ride_booking(
    data: Data<AppState>,
    param_obj: Json<RideBookingRequest>,
) -> Result<HttpResponse, AppError> {
    let request_body = param_obj.into_inner();

    Ok(HttpResponse::Created().json(booking::book_ride(data, request_body).await?))
}
