/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use actix_web::{http::StatusCode, web::Data, ResponseError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use ride_booking_service::common::types::*;
use ride_booking_service::domain::action::ui::booking::{book_ride, validate_booking_request};
use ride_booking_service::domain::types::ui::booking::RideBookingRequest;
use ride_booking_service::environment::{AppState, BookingMessages};
use ride_booking_service::outbound::external::FareEstimator;
use ride_booking_service::outbound::types::{
    RideEstimateData, RideEstimateRequest, RideEstimateResponse,
};
use ride_booking_service::tools::error::AppError;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

fn booking_messages() -> BookingMessages {
    BookingMessages {
        missing_fields: "The [pickup_location, dropoff_location, ride_type] fields are required."
            .to_string(),
        invalid_ride_type: "Invalid ride_type '{ride_type}'. Allowed values are {valid_ride_types}."
            .to_string(),
        invalid_location:
            "pickup_location and dropoff_location must include 'latitude' and 'longitude'."
                .to_string(),
    }
}

fn valid_ride_types() -> Vec<RideType> {
    vec![
        RideType("standard".to_string()),
        RideType("premium".to_string()),
    ]
}

fn booking_request(payload: Value) -> RideBookingRequest {
    serde_json::from_value(payload).expect("Failed to decode booking request payload")
}

fn validate(payload: Value) -> Result<(), AppError> {
    validate_booking_request(
        &booking_request(payload),
        &valid_ride_types(),
        &booking_messages(),
    )
    .map(|_| ())
}

fn valid_payload() -> Value {
    json!({
        "pickup_location": { "latitude": 10.0, "longitude": 20.0 },
        "dropoff_location": { "latitude": 30.0, "longitude": 40.0 },
        "ride_type": "standard",
    })
}

fn app_state(estimator: Arc<dyn FareEstimator>) -> Data<AppState> {
    Data::new(AppState {
        estimator,
        valid_ride_types: valid_ride_types(),
        booking_messages: booking_messages(),
        request_timeout: 9000,
    })
}

struct FixedEstimator;

#[async_trait]
impl FareEstimator for FixedEstimator {
    async fn get_ride_estimate(
        &self,
        _request: RideEstimateRequest,
    ) -> Result<RideEstimateResponse, AppError> {
        Ok(RideEstimateResponse {
            message: Some("Ride estimate calculated successfully".to_string()),
            data: Some(RideEstimateData {
                estimated_fare: 25.5,
                distance_km: 10.5,
                pickup_geohash: "abc".to_string(),
                dropoff_geohash: "xyz".to_string(),
            }),
        })
    }
}

struct EmptyEstimator;

#[async_trait]
impl FareEstimator for EmptyEstimator {
    async fn get_ride_estimate(
        &self,
        _request: RideEstimateRequest,
    ) -> Result<RideEstimateResponse, AppError> {
        Ok(RideEstimateResponse {
            message: None,
            data: None,
        })
    }
}

struct FailingEstimator;

#[async_trait]
impl FareEstimator for FailingEstimator {
    async fn get_ride_estimate(
        &self,
        _request: RideEstimateRequest,
    ) -> Result<RideEstimateResponse, AppError> {
        Err(AppError::InternalError(
            "Error communicating with external API : connection refused".to_string(),
        ))
    }
}

#[test]
fn missing_any_field_is_bad_request() {
    let payloads = vec![
        json!({}),
        json!({ "pickup_location": { "latitude": 10.0, "longitude": 20.0 }, "ride_type": "standard" }),
        json!({ "dropoff_location": { "latitude": 30.0, "longitude": 40.0 }, "ride_type": "standard" }),
        json!({
            "pickup_location": { "latitude": 10.0, "longitude": 20.0 },
            "dropoff_location": { "latitude": 30.0, "longitude": 40.0 },
        }),
    ];

    for payload in payloads {
        let err = validate(payload).expect_err("payload should be rejected");
        assert_eq!(err.code(), "BAD_REQUEST");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn missing_field_names_are_reported() {
    let err = validate(json!({ "ride_type": "standard" })).expect_err("locations are missing");

    match err {
        AppError::MissingFields { missing_fields, .. } => {
            assert_eq!(missing_fields, vec!["pickup_location", "dropoff_location"]);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn empty_values_count_as_missing() {
    let mut payload = valid_payload();
    payload["ride_type"] = json!("");
    assert_eq!(
        validate(payload).expect_err("empty ride_type").code(),
        "BAD_REQUEST"
    );

    let mut payload = valid_payload();
    payload["pickup_location"] = json!({});
    assert_eq!(
        validate(payload).expect_err("empty pickup").code(),
        "BAD_REQUEST"
    );

    let mut payload = valid_payload();
    payload["dropoff_location"] = Value::Null;
    assert_eq!(
        validate(payload).expect_err("null dropoff").code(),
        "BAD_REQUEST"
    );
}

#[test]
fn missing_field_wins_over_invalid_ride_type() {
    let payload = json!({
        "pickup_location": { "latitude": 10.0, "longitude": 20.0 },
        "ride_type": "luxury",
    });

    assert_eq!(
        validate(payload).expect_err("dropoff is missing").code(),
        "BAD_REQUEST"
    );
}

#[test]
fn unknown_ride_type_is_rejected_with_allowed_set() {
    let mut payload = valid_payload();
    payload["ride_type"] = json!("luxury");

    let err = validate(payload).expect_err("luxury is not configured");
    assert_eq!(err.code(), "INVALID_RIDE_TYPE");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    let message = err.message();
    assert!(message.contains("luxury"), "offending value in: {message}");
    assert!(message.contains("standard"), "allowed set in: {message}");
    assert!(message.contains("premium"), "allowed set in: {message}");
}

#[test]
fn non_string_ride_type_is_rejected() {
    let mut payload = valid_payload();
    payload["ride_type"] = json!(7);

    let err = validate(payload).expect_err("numeric ride_type");
    assert_eq!(err.code(), "INVALID_RIDE_TYPE");
    assert!(err.message().contains('7'));
}

#[test]
fn ride_type_membership_wins_over_bad_location() {
    let payload = json!({
        "pickup_location": { "latitude": 95.0, "longitude": 20.0 },
        "dropoff_location": { "latitude": 30.0, "longitude": 40.0 },
        "ride_type": "luxury",
    });

    assert_eq!(
        validate(payload).expect_err("ride_type checked first").code(),
        "INVALID_RIDE_TYPE"
    );
}

#[test]
fn location_missing_coordinate_key_is_invalid_location() {
    let mut payload = valid_payload();
    payload["dropoff_location"] = json!({ "latitude": 30.0 });

    let err = validate(payload).expect_err("longitude key is missing");
    assert_eq!(err.code(), "INVALID_LOCATION");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn non_numeric_coordinate_is_invalid_location() {
    let mut payload = valid_payload();
    payload["pickup_location"] = json!({ "latitude": "10", "longitude": 20.0 });

    assert_eq!(
        validate(payload).expect_err("string latitude").code(),
        "INVALID_LOCATION"
    );
}

#[test]
fn out_of_range_coordinates_are_invalid_location() {
    let out_of_range = vec![
        json!({ "latitude": 90.5, "longitude": 20.0 }),
        json!({ "latitude": -91.0, "longitude": 20.0 }),
        json!({ "latitude": 10.0, "longitude": 180.5 }),
        json!({ "latitude": 10.0, "longitude": -200.0 }),
    ];

    for location in out_of_range {
        let mut payload = valid_payload();
        payload["pickup_location"] = location.to_owned();

        let err = validate(payload).expect_err("out of range coordinate");
        assert_eq!(err.code(), "INVALID_LOCATION", "location: {location}");
    }
}

#[test]
fn boundary_coordinates_are_accepted() {
    let mut payload = valid_payload();
    payload["pickup_location"] = json!({ "latitude": 90.0, "longitude": -180.0 });
    payload["dropoff_location"] = json!({ "latitude": -90.0, "longitude": 180.0 });

    assert!(validate(payload).is_ok());
}

#[test]
fn pickup_is_reported_before_dropoff() {
    let mut payload = valid_payload();
    payload["pickup_location"] = json!({ "latitude": 95.0, "longitude": 20.0 });
    payload["dropoff_location"] = json!({ "latitude": 30.0 });

    let err = validate(payload).expect_err("both locations are invalid");
    match err {
        AppError::InvalidLocation { detail, .. } => {
            assert!(detail.contains("95"), "pickup detail expected, got: {detail}");
        }
        other => panic!("expected InvalidLocation, got {other:?}"),
    }
}

#[test]
fn validated_booking_carries_typed_fields() {
    let booking = validate_booking_request(
        &booking_request(valid_payload()),
        &valid_ride_types(),
        &booking_messages(),
    )
    .expect("payload is valid");

    assert_eq!(booking.pickup_location.latitude, Latitude(10.0));
    assert_eq!(booking.pickup_location.longitude, Longitude(20.0));
    assert_eq!(booking.dropoff_location.latitude, Latitude(30.0));
    assert_eq!(booking.dropoff_location.longitude, Longitude(40.0));
    assert_eq!(booking.ride_type, RideType("standard".to_string()));
}

#[tokio::test]
async fn booking_merges_estimate_into_ride_record() {
    let data = app_state(Arc::new(FixedEstimator));

    let response = book_ride(data, booking_request(valid_payload()))
        .await
        .expect("booking should succeed");

    assert_eq!(response.message, "Ride request created successfully.");

    let record = response.data;
    assert_eq!(record.pickup_location.latitude, Latitude(10.0));
    assert_eq!(record.dropoff_location.longitude, Longitude(40.0));
    assert_eq!(record.ride_type, RideType("standard".to_string()));
    assert_eq!(record.estimated_fare, 25.5);
    assert_eq!(record.distance_km, 10.5);
    assert_eq!(record.pickup_geohash, "abc");
    assert_eq!(record.dropoff_geohash, "xyz");

    assert!(Uuid::parse_str(&record.ride_id.0).is_ok());
    assert!(NaiveDateTime::parse_from_str(&record.booking_time.0, BOOKING_TIME_FORMAT).is_ok());
}

#[tokio::test]
async fn identical_payloads_get_distinct_ride_ids() {
    let data = app_state(Arc::new(FixedEstimator));

    let first = book_ride(data.to_owned(), booking_request(valid_payload()))
        .await
        .expect("first booking");
    let second = book_ride(data, booking_request(valid_payload()))
        .await
        .expect("second booking");

    assert_ne!(first.data.ride_id, second.data.ride_id);
}

#[tokio::test]
async fn estimator_without_data_is_external_api_error() {
    let data = app_state(Arc::new(EmptyEstimator));

    let err = book_ride(data, booking_request(valid_payload()))
        .await
        .expect_err("no data from estimator");

    assert_eq!(err.code(), "EXTERNAL_API_ERROR");
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn estimator_transport_failure_is_server_error() {
    let data = app_state(Arc::new(FailingEstimator));

    let err = book_ride(data, booking_request(valid_payload()))
        .await
        .expect_err("transport failure");

    assert_eq!(err.code(), "SERVER_ERROR");
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_failures_skip_the_estimator() {
    struct PanickingEstimator;

    #[async_trait]
    impl FareEstimator for PanickingEstimator {
        async fn get_ride_estimate(
            &self,
            _request: RideEstimateRequest,
        ) -> Result<RideEstimateResponse, AppError> {
            panic!("estimator must not be called for invalid payloads");
        }
    }

    let data = app_state(Arc::new(PanickingEstimator));

    let err = book_ride(data, booking_request(json!({ "ride_type": "standard" })))
        .await
        .expect_err("missing locations");

    assert_eq!(err.code(), "BAD_REQUEST");
}

#[tokio::test]
async fn response_serializes_with_wire_field_names() {
    let data = app_state(Arc::new(FixedEstimator));

    let response = book_ride(data, booking_request(valid_payload()))
        .await
        .expect("booking should succeed");
    let body = serde_json::to_value(&response).expect("response serializes");

    assert_eq!(body["message"], "Ride request created successfully.");
    assert_eq!(body["data"]["pickup_location"]["latitude"], json!(10.0));
    assert_eq!(body["data"]["dropoff_location"]["longitude"], json!(40.0));
    assert_eq!(body["data"]["ride_type"], "standard");
    assert_eq!(body["data"]["estimated_fare"], json!(25.5));
    assert_eq!(body["data"]["distance_km"], json!(10.5));
    assert_eq!(body["data"]["pickup_geohash"], "abc");
    assert_eq!(body["data"]["dropoff_geohash"], "xyz");
    assert!(body["data"]["ride_id"].is_string());
    assert!(body["data"]["booking_time"].is_string());
}
