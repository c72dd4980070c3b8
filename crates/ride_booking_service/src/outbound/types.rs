/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use serde::{Deserialize, Serialize};

use crate::common::types::*;

// Fare/distance/geohash estimation for a booking attempt
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RideEstimateRequest {
    pub pickup_location: Point,
    pub dropoff_location: Point,
    pub ride_type: RideType,
}

// `data` is absent when the estimator answered but had nothing usable;
// the orchestrator distinguishes that case from transport failures.
#[derive(Deserialize, Debug)]
pub struct RideEstimateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<RideEstimateData>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RideEstimateData {
    pub estimated_fare: f64,
    pub distance_km: f64,
    pub pickup_geohash: String,
    pub dropoff_geohash: String,
}
