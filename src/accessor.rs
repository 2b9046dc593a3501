//! Cached course catalog accessor
//!
//! Single read path to course data with bounded staleness. The accessor
//! holds one in-memory snapshot, refreshes it through a [`CatalogSource`]
//! when it goes stale, and de-duplicates concurrent refreshes so at most one
//! fetch is outstanding at a time.

use crate::config::CursosConfig;
use crate::models::{self, CourseCatalog, CourseRecord};
use crate::source::{CatalogSource, HttpCatalogSource};
use crate::Result;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Time source injected into the accessor for deterministic tests
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time source used in production
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Cached catalog snapshot plus the instant of the last successful fetch.
/// Replaced wholesale on every successful refresh, never merged.
struct CacheState {
    catalog: CourseCatalog,
    last_fetch: Option<Instant>,
}

/// Read accessor over the remote course catalog with a fixed staleness window
pub struct CatalogAccessor {
    source: Box<dyn CatalogSource>,
    clock: Box<dyn Clock>,
    cache_duration: Duration,
    state: RwLock<CacheState>,
    // Serializes refreshes; waiters re-check freshness after acquiring it
    refresh_lock: Mutex<()>,
}

impl CatalogAccessor {
    /// Create an accessor over `source` with the given staleness window
    #[must_use]
    pub fn new(source: Box<dyn CatalogSource>, cache_duration: Duration) -> Self {
        Self::with_clock(source, cache_duration, Box::new(SystemClock))
    }

    /// Create an accessor with an injected time source
    #[must_use]
    pub fn with_clock(
        source: Box<dyn CatalogSource>,
        cache_duration: Duration,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            source,
            clock,
            cache_duration,
            state: RwLock::new(CacheState {
                catalog: CourseCatalog::new(),
                last_fetch: None,
            }),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Create an accessor with the HTTP source described by the configuration
    pub fn from_config(config: &CursosConfig) -> Result<Self> {
        let source = HttpCatalogSource::from_config(&config.catalog)?;
        Ok(Self::new(
            Box::new(source),
            Duration::from_secs(u64::from(config.catalog.cache_ttl_minutes) * 60),
        ))
    }

    /// Returns the current catalog, refreshing it first when no fetch has
    /// succeeded yet, when the snapshot is older than the staleness window,
    /// or when `force_refresh` is set.
    ///
    /// Concurrent callers share an in-flight refresh: whoever completes one
    /// while this call waits on the refresh lock satisfies this call too.
    /// A refresh failure propagates; the previous snapshot stays in place
    /// for subsequent calls.
    pub async fn get_catalog(&self, force_refresh: bool) -> Result<CourseCatalog> {
        let observed = self.last_fetch();
        if force_refresh || self.is_stale(observed) {
            let _guard = self.refresh_lock.lock().await;
            if self.last_fetch() == observed {
                self.refresh_locked().await?;
            } else {
                debug!("Sharing refresh completed by a concurrent caller");
            }
        }
        Ok(self.read_state(|state| state.catalog.clone()))
    }

    /// Unconditionally fetches a fresh catalog, replacing the snapshot and
    /// timestamp atomically on success. No retry is attempted.
    pub async fn refresh(&self) -> Result<CourseCatalog> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    async fn refresh_locked(&self) -> Result<CourseCatalog> {
        let catalog = self.source.fetch().await?;
        let fetched_at = self.clock.now();
        {
            let mut state = self.state.write().expect("cache lock poisoned");
            state.catalog = catalog.clone();
            state.last_fetch = Some(fetched_at);
        }
        info!("Catalog snapshot replaced: {} locations", catalog.len());
        Ok(catalog)
    }

    /// Location names currently in the catalog
    #[must_use]
    pub fn list_locations(&self) -> Vec<String> {
        self.read_state(|state| state.catalog.keys().cloned().collect())
    }

    /// Records for one location; empty if the location is absent
    #[must_use]
    pub fn courses_for(&self, location: &str) -> Vec<CourseRecord> {
        self.read_state(|state| state.catalog.get(location).cloned().unwrap_or_default())
    }

    /// Sum of enrolled students across the cached catalog
    #[must_use]
    pub fn total_enrolled(&self) -> u32 {
        self.read_state(|state| models::total_enrolled(&state.catalog))
    }

    /// Count of course records across the cached catalog
    #[must_use]
    pub fn total_course_count(&self) -> usize {
        self.read_state(|state| models::total_course_count(&state.catalog))
    }

    /// Records with pending or irregular lessons in the cached catalog
    #[must_use]
    pub fn courses_with_outstanding_issues(&self) -> Vec<CourseRecord> {
        self.read_state(|state| models::courses_with_outstanding_issues(&state.catalog))
    }

    fn last_fetch(&self) -> Option<Instant> {
        self.read_state(|state| state.last_fetch)
    }

    fn is_stale(&self, last_fetch: Option<Instant>) -> bool {
        match last_fetch {
            None => true,
            Some(at) => self.clock.now().saturating_duration_since(at) > self.cache_duration,
        }
    }

    fn read_state<T>(&self, f: impl FnOnce(&CacheState) -> T) -> T {
        let state = self.state.read().expect("cache lock poisoned");
        f(&state)
    }
}
