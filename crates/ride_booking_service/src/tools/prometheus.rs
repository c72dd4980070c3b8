/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
#![allow(clippy::expect_used)]

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::{opts, register_histogram_vec, HistogramVec};

pub static CALL_EXTERNAL_API: once_cell::sync::Lazy<HistogramVec> =
    once_cell::sync::Lazy::new(|| {
        register_histogram_vec!(
            opts!("call_external_api", "Outgoing API requests").into(),
            &["method", "endpoint", "status"]
        )
        .expect("Failed to register external API call metrics")
    });

pub fn prometheus_metrics() -> PrometheusMetrics {
    PrometheusMetricsBuilder::new("ride_booking_service")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus Metrics")
}

/// Observes the duration and terminal status of one outgoing API call.
#[macro_export]
macro_rules! call_external_api {
    ($method:expr, $endpoint:expr, $status:expr, $start:expr) => {
        let duration = $start.elapsed().as_secs_f64();
        $crate::tools::prometheus::CALL_EXTERNAL_API
            .with_label_values(&[$method, $endpoint, $status])
            .observe(duration);
    };
}
