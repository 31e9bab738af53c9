use alchm_celestial::{SolarDay, ZodiacSign, day_ruler, hour_ruler, lunar_phase};
use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use serde_json::json;

use super::AppState;

/// Equinox solar frame: 06:00 sunrise, 18:00 sunset, UTC. Used until a
/// location-aware ephemeris is wired in.
pub(super) fn default_solar_frame(now: DateTime<Utc>) -> SolarDay {
    fn at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
        date.and_hms_opt(hour, 0, 0)
            .map(|t| t.and_utc())
            .unwrap_or_default()
    }
    let today = now.date_naive();
    SolarDay {
        sunrise: at_hour(today, 6),
        sunset: at_hour(today, 18),
        previous_sunset: at_hour(today - Duration::days(1), 18),
        next_sunrise: at_hour(today + Duration::days(1), 6),
    }
}

/// GET /positions/current - planetary chart for the current hour.
pub async fn current_positions(State(state): State<AppState>) -> impl IntoResponse {
    let positions = state.positions.current(Utc::now()).await;
    Json((*positions).clone())
}

/// GET /planetary/current-hour - day and hour rulers for the current
/// planetary hour, with the hour ruler's elemental association.
pub async fn current_hour() -> impl IntoResponse {
    let now = Utc::now();
    let frame = default_solar_frame(now);
    let day = day_ruler(now.date_naive().weekday());
    let hour = hour_ruler(now, &frame);
    Json(json!({
        "timestamp": now,
        "day_ruler": day,
        "hour_ruler": hour,
        "hour_element": hour.and_then(|p| p.ruling_element()),
        "sun_sign": ZodiacSign::from_date(now.date_naive()),
        "is_daytime": (6..18).contains(&now.hour()),
    }))
}

/// GET /lunar/phase - current lunar phase name and illumination fraction.
pub async fn lunar() -> impl IntoResponse {
    let now = Utc::now();
    let phase = lunar_phase(now);
    Json(json!({
        "timestamp": now,
        "phase": phase.name,
        "illumination": phase.illumination,
    }))
}
