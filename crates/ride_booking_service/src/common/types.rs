/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RideId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Latitude(pub f64);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Longitude(pub f64);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RideType(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct BookingTime(pub String);

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Second granularity, no timezone suffix. Downstream consumers parse this
// exact shape, so it is fixed here rather than in config.
pub const BOOKING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl BookingTime {
    pub fn now() -> BookingTime {
        BookingTime(Utc::now().format(BOOKING_TIME_FORMAT).to_string())
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub latitude: Latitude,
    pub longitude: Longitude,
}
