/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
#![allow(clippy::expect_used)]

use std::{sync::Arc, time::Duration};

use crate::common::types::RideType;
use crate::outbound::external::{FareEstimator, HttpFareEstimator};
use crate::tools::logger::LoggerConfig;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub workers: usize,
    pub logger_cfg: LoggerConfig,
    pub fare_estimator_url: String,
    pub request_timeout: u64,
    pub valid_ride_types: Vec<String>,
    pub booking_messages: BookingMessages,
}

/// Client-facing message templates for booking validation failures.
/// Loaded once from config and handed to the validator as an immutable table;
/// `{ride_type}` and `{valid_ride_types}` are substituted at rejection time.
#[derive(Debug, Deserialize, Clone)]
pub struct BookingMessages {
    pub missing_fields: String,
    pub invalid_ride_type: String,
    pub invalid_location: String,
}

#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<dyn FareEstimator>,
    pub valid_ride_types: Vec<RideType>,
    pub booking_messages: BookingMessages,
    pub request_timeout: u64,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> AppState {
        let fare_estimator_url = Url::parse(app_config.fare_estimator_url.as_str())
            .expect("Failed to parse fare_estimator_url.");

        let estimator: Arc<dyn FareEstimator> = Arc::new(HttpFareEstimator::new(
            fare_estimator_url,
            Duration::from_millis(app_config.request_timeout),
        ));

        AppState {
            estimator,
            valid_ride_types: app_config
                .valid_ride_types
                .into_iter()
                .map(RideType)
                .collect(),
            booking_messages: app_config.booking_messages,
            request_timeout: app_config.request_timeout,
        }
    }
}
