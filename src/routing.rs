//! HTTP routing-service adapter (OSRM-compatible `route` endpoint).
//!
//! The closed-form estimator is the planner's default; this adapter exists
//! for callers who want road-accurate times and can afford the calls.
//! Results are memoized per coordinate pair, and transport failures fall
//! back to the closed-form estimate so a planning run never blocks on the
//! service.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Deserialize;

use crate::haversine::HaversineEstimator;
use crate::traits::DriveTimeEstimator;

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub struct RoutingClient {
    config: RoutingConfig,
    client: reqwest::blocking::Client,
    fallback: HaversineEstimator,
    cache: Mutex<HashMap<(String, String), i32>>,
}

impl RoutingClient {
    pub fn new(config: RoutingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            fallback: HaversineEstimator::default(),
            cache: Mutex::new(HashMap::new()),
        })
    }

    fn fetch_minutes(&self, from: (f64, f64), to: (f64, f64)) -> Option<i32> {
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.config.base_url, self.config.profile, from.1, from.0, to.1, to.0
        );

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<RouteResponse>());

        match response {
            Ok(body) => body
                .routes
                .first()
                .map(|route| (route.duration / 60.0).round() as i32),
            Err(_) => None,
        }
    }
}

impl DriveTimeEstimator for RoutingClient {
    fn drive_minutes(&self, from: (f64, f64), to: (f64, f64)) -> i32 {
        let key = (coord_key(from), coord_key(to));
        if let Some(cached) = self
            .cache
            .lock()
            .ok()
            .and_then(|cache| cache.get(&key).copied())
        {
            return cached;
        }

        let minutes = self
            .fetch_minutes(from, to)
            .unwrap_or_else(|| self.fallback.drive_minutes(from, to));
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, minutes);
        }
        minutes
    }
}

fn coord_key(point: (f64, f64)) -> String {
    format!("{:.6},{:.6}", point.0, point.1)
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    routes: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    duration: f64,
}
