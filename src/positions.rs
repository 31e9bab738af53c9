use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use alchm_celestial::{PlanetaryPositions, fallback_positions};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::AstrologizeConfig;

/// Fetches the current planetary chart from the astrologize API, caching
/// one chart per clock hour. Positions drift slowly enough that an
/// hour-bucketed chart is accurate for culinary scoring.
///
/// Every failure path degrades to the static fallback chart, so callers
/// always receive a complete set of core positions.
pub struct PositionService {
    client: Option<reqwest::Client>,
    base_url: Option<String>,
    cache_ttl: Duration,
    cache: RwLock<HashMap<i64, CachedChart>>,
}

struct CachedChart {
    fetched_at: DateTime<Utc>,
    positions: Arc<PlanetaryPositions>,
}

impl PositionService {
    pub fn new(config: &AstrologizeConfig) -> Result<Self> {
        let client = match &config.base_url {
            Some(_) => Some(
                reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.timeout_secs))
                    .build()?,
            ),
            None => None,
        };
        Ok(PositionService {
            client,
            base_url: config.base_url.clone(),
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Service with no upstream configured. Always serves the static
    /// fallback chart; used by the CLI and by tests.
    pub fn offline() -> Self {
        PositionService {
            client: None,
            base_url: None,
            cache_ttl: Duration::from_secs(3600),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Chart for the hour containing `now`.
    pub async fn current(&self, now: DateTime<Utc>) -> Arc<PlanetaryPositions> {
        let bucket = now.timestamp().div_euclid(3600);

        if let Some(positions) = self.cached(bucket, now).await {
            return positions;
        }

        let positions = Arc::new(self.fetch().await);
        let mut cache = self.cache.write().await;
        cache.retain(|b, _| *b >= bucket);
        cache.insert(
            bucket,
            CachedChart {
                fetched_at: now,
                positions: Arc::clone(&positions),
            },
        );
        positions
    }

    async fn cached(&self, bucket: i64, now: DateTime<Utc>) -> Option<Arc<PlanetaryPositions>> {
        let cache = self.cache.read().await;
        let entry = cache.get(&bucket)?;
        let age = now.signed_duration_since(entry.fetched_at).num_seconds();
        if age >= 0 && age as u64 <= self.cache_ttl.as_secs() {
            Some(Arc::clone(&entry.positions))
        } else {
            None
        }
    }

    async fn fetch(&self) -> PlanetaryPositions {
        let (Some(client), Some(base)) = (&self.client, &self.base_url) else {
            return fallback_positions();
        };
        match Self::request(client, base).await {
            Ok(positions) => positions.with_fallbacks(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "position fetch failed, serving static fallback chart"
                );
                fallback_positions()
            }
        }
    }

    async fn request(
        client: &reqwest::Client,
        base: &str,
    ) -> Result<PlanetaryPositions, reqwest::Error> {
        let response = client
            .get(format!("{base}/positions/current"))
            .send()
            .await?
            .error_for_status()?;
        response.json::<PlanetaryPositions>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchm_celestial::{Planet, ZodiacSign};
    use chrono::TimeZone;

    #[tokio::test]
    async fn offline_service_serves_fallback_chart() {
        let service = PositionService::offline();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let positions = service.current(now).await;
        assert!(positions.is_complete());
        assert_eq!(positions.get(Planet::Sun).unwrap().sign, ZodiacSign::Capricorn);
    }

    #[tokio::test]
    async fn requests_within_one_hour_share_a_cached_chart() {
        let service = PositionService::offline();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 5, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 12, 55, 0).unwrap();
        let first = service.current(now).await;
        let second = service.current(later).await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn new_hour_gets_a_fresh_chart() {
        let service = PositionService::offline();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let next_hour = Utc.with_ymd_and_hms(2025, 6, 1, 13, 1, 0).unwrap();
        let first = service.current(now).await;
        let second = service.current(next_hour).await;
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }
}
