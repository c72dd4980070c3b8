/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::types::*;

/// Raw booking payload as it arrives on the wire. Fields stay loosely typed
/// until the validator accepts them; a missing key and an explicit null are
/// both treated as absent.
#[derive(Deserialize, Debug, Default)]
pub struct RideBookingRequest {
    #[serde(default)]
    pub pickup_location: Option<Value>,
    #[serde(default)]
    pub dropoff_location: Option<Value>,
    #[serde(default)]
    pub ride_type: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub pickup_location: Point,
    pub dropoff_location: Point,
    pub ride_type: RideType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RideRecord {
    pub ride_id: RideId,
    pub pickup_location: Point,
    pub dropoff_location: Point,
    pub ride_type: RideType,
    pub booking_time: BookingTime,
    pub estimated_fare: f64,
    pub distance_km: f64,
    pub pickup_geohash: String,
    pub dropoff_geohash: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RideBookingResponse {
    pub message: String,
    pub data: RideRecord,
}

#[derive(Serialize, Debug)]
pub struct ResponseData {
    pub result: String,
}
