use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use sysinfo::System;

use crate::{constants::{PROFILE_VIEW, START_TIME}, AppState};

#[derive(Serialize)]
struct HostInfo {
    os: String,
    hostname: String,
    cpu_count: usize,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: &'static str,
    submissions_in_flight: usize,
    profile_view_generation: u64,
    profile_view_cached: bool,
    host: HostInfo,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let host = HostInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: num_cpus::get(),
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        submissions_in_flight: state.in_flight.len(),
        profile_view_generation: state.view_cache.generation(),
        profile_view_cached: state.view_cache.get(PROFILE_VIEW).is_some(),
        host,
    })
}
