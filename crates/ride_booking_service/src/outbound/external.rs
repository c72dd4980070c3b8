/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
#![allow(clippy::expect_used)]

use super::types::*;
use crate::tools::callapi::call_api;
use crate::tools::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use std::time::Duration;

/// Capability handle for the fare/geocode estimator, so the booking flow can
/// be exercised against a test double instead of the real service.
#[async_trait]
pub trait FareEstimator: Send + Sync {
    async fn get_ride_estimate(
        &self,
        request: RideEstimateRequest,
    ) -> Result<RideEstimateResponse, AppError>;
}

pub struct HttpFareEstimator {
    url: Url,
    client: Client,
}

impl HttpFareEstimator {
    /// The timeout bounds the full round trip; the estimator call is the only
    /// suspension point in the booking path and must not block indefinitely.
    pub fn new(url: Url, timeout: Duration) -> HttpFareEstimator {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create fare estimator HTTP client.");

        HttpFareEstimator { url, client }
    }
}

#[async_trait]
impl FareEstimator for HttpFareEstimator {
    async fn get_ride_estimate(
        &self,
        request: RideEstimateRequest,
    ) -> Result<RideEstimateResponse, AppError> {
        call_api::<RideEstimateResponse, RideEstimateRequest>(
            &self.client,
            Method::POST,
            &self.url,
            vec![("content-type", "application/json")],
            Some(request),
        )
        .await
    }
}
