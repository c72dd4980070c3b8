/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::environment::{AppState, BookingMessages};
use crate::outbound::types::RideEstimateRequest;
use crate::tools::error::AppError;
use crate::{common::types::*, domain::types::ui::booking::*};
use actix_web::web::Data;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

const SUCCESS_MESSAGE: &str = "Ride request created successfully.";
const NO_ESTIMATE_DATA: &str = "The external API did not return any data.";

/// Turns a validated booking into a complete ride record by minting the ride
/// identifier and booking timestamp, then asking the fare estimator for
/// fare/distance/geohashes and merging its answer in.
///
/// The identifier is minted before the outbound call so a failed estimate can
/// be correlated to this attempt in the logs. Re-submitting the same payload
/// mints a fresh identifier; there is no deduplication of booking attempts.
pub async fn book_ride(
    data: Data<AppState>,
    request: RideBookingRequest,
) -> Result<RideBookingResponse, AppError> {
    let ValidatedBooking {
        pickup_location,
        dropoff_location,
        ride_type,
    } = validate_booking_request(&request, &data.valid_ride_types, &data.booking_messages)?;

    let ride_id = RideId(Uuid::new_v4().to_string());
    let booking_time = BookingTime::now();

    info!(tag = "[Ride Booking]", ride_id = %ride_id.0, ride_type = %ride_type.0, "Created ride booking attempt");

    let estimate = data
        .estimator
        .get_ride_estimate(RideEstimateRequest {
            pickup_location,
            dropoff_location,
            ride_type: ride_type.to_owned(),
        })
        .await?;

    let estimate = estimate
        .data
        .ok_or_else(|| AppError::ExternalApiError(NO_ESTIMATE_DATA.to_string()))?;

    Ok(RideBookingResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: RideRecord {
            ride_id,
            pickup_location,
            dropoff_location,
            ride_type,
            booking_time,
            estimated_fare: estimate.estimated_fare,
            distance_km: estimate.distance_km,
            pickup_geohash: estimate.pickup_geohash,
            dropoff_geohash: estimate.dropoff_geohash,
        },
    })
}

/// Checks a raw booking payload before anything touches the network.
///
/// Order is fixed: field presence, then ride type membership, then coordinate
/// shape and range (pickup before dropoff). A payload missing a field never
/// reports an invalid ride type.
pub fn validate_booking_request(
    request: &RideBookingRequest,
    valid_ride_types: &[RideType],
    messages: &BookingMessages,
) -> Result<ValidatedBooking, AppError> {
    match (
        &request.pickup_location,
        &request.dropoff_location,
        &request.ride_type,
    ) {
        (Some(pickup_location), Some(dropoff_location), Some(ride_type))
            if !(is_empty(pickup_location)
                || is_empty(dropoff_location)
                || is_empty(ride_type)) =>
        {
            let ride_type = validate_ride_type(ride_type, valid_ride_types, messages)?;
            let pickup_location = validate_location(pickup_location, messages)?;
            let dropoff_location = validate_location(dropoff_location, messages)?;

            Ok(ValidatedBooking {
                pickup_location,
                dropoff_location,
                ride_type,
            })
        }
        _ => Err(AppError::MissingFields {
            message: messages.missing_fields.to_owned(),
            missing_fields: missing_booking_fields(request),
        }),
    }
}

fn missing_booking_fields(request: &RideBookingRequest) -> Vec<String> {
    [
        ("pickup_location", request.pickup_location.as_ref()),
        ("dropoff_location", request.dropoff_location.as_ref()),
        ("ride_type", request.ride_type.as_ref()),
    ]
    .into_iter()
    .filter(|(_, field)| field.map_or(true, is_empty))
    .map(|(name, _)| name.to_string())
    .collect()
}

fn is_empty(field: &Value) -> bool {
    match field {
        Value::Null => true,
        Value::String(value) => value.is_empty(),
        Value::Object(value) => value.is_empty(),
        Value::Array(value) => value.is_empty(),
        _ => false,
    }
}

fn validate_ride_type(
    ride_type: &Value,
    valid_ride_types: &[RideType],
    messages: &BookingMessages,
) -> Result<RideType, AppError> {
    if let Some(value) = ride_type.as_str() {
        if valid_ride_types.iter().any(|RideType(valid)| valid == value) {
            return Ok(RideType(value.to_string()));
        }
    }

    let allowed = valid_ride_types
        .iter()
        .map(|RideType(valid)| valid.as_str())
        .collect::<Vec<&str>>();
    let offending = match ride_type.as_str() {
        Some(value) => value.to_string(),
        None => ride_type.to_string(),
    };

    Err(AppError::InvalidRideType(
        messages
            .invalid_ride_type
            .replace("{ride_type}", &offending)
            .replace("{valid_ride_types}", &format!("{allowed:?}")),
    ))
}

fn validate_location(location: &Value, messages: &BookingMessages) -> Result<Point, AppError> {
    let latitude = location.get("latitude").and_then(Value::as_f64);
    let longitude = location.get("longitude").and_then(Value::as_f64);

    let (latitude, longitude) = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => (latitude, longitude),
        _ => {
            return Err(AppError::InvalidLocation {
                message: messages.invalid_location.to_owned(),
                detail: format!("Latitude or longitude is missing for location: {location}"),
            })
        }
    };

    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
    {
        return Err(AppError::InvalidLocation {
            message: messages.invalid_location.to_owned(),
            detail: format!("Invalid latitude ({latitude}) or longitude ({longitude}) range."),
        });
    }

    Ok(Point {
        latitude: Latitude(latitude),
        longitude: Longitude(longitude),
    })
}
