//! Caching layer for solved plans.
//!
//! A plan depends only on the line length and the walk budget, so solved
//! results are cached under that pair and shared between requests. The
//! search itself runs on tokio's blocking pool.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::Line;
use crate::planner::{Planner, SearchError, SearchResult};

/// Cache key for plans: (station count, walk budget).
type PlanKey = (usize, u32);

/// Cached plan entry.
type PlanEntry = Arc<SearchResult>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 256,
        }
    }
}

/// Error from a cached solve.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The search itself failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The blocking search task panicked or was cancelled
    #[error("search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Planner with a shared cache of solved plans.
pub struct CachedPlanner {
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl CachedPlanner {
    /// Create a new cached planner with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Solve the line for a walk budget, using the cache if available.
    ///
    /// Concurrent calls for the same key share a single search.
    pub async fn solve(
        &self,
        line: Line,
        walk_budget: u32,
    ) -> Result<PlanEntry, Arc<PlanError>> {
        let key = (line.station_count(), walk_budget);

        self.plans
            .try_get_with(key, async move {
                debug!(stations = key.0, walk_budget, "plan cache miss");
                let result =
                    tokio::task::spawn_blocking(move || Planner::new(&line).solve(walk_budget))
                        .await??;
                Ok::<_, PlanError>(Arc::new(result))
            })
            .await
    }

    /// Solve every budget in `budgets` in ascending order.
    pub async fn sweep(
        &self,
        line: Line,
        budgets: impl IntoIterator<Item = u32>,
    ) -> Result<Vec<PlanEntry>, Arc<PlanError>> {
        let mut results = Vec::new();
        for walk_budget in budgets {
            results.push(self.solve(line, walk_budget).await?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 256);
    }

    #[tokio::test]
    async fn solve_matches_planner() {
        let planner = CachedPlanner::new(&CacheConfig::default());
        let line = Line::default();

        let cached = planner.solve(line, 2).await.unwrap();
        let direct = Planner::new(&line).solve(2).unwrap();

        assert_eq!(*cached, direct);
        assert_eq!(cached.total_ride(), Some(33));
    }

    #[tokio::test]
    async fn repeated_solve_returns_shared_entry() {
        let planner = CachedPlanner::new(&CacheConfig::default());
        let line = Line::new(5).unwrap();

        let first = planner.solve(line, 1).await.unwrap();
        let second = planner.solve(line, 1).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn concurrent_solves_share_one_search() {
        let planner = CachedPlanner::new(&CacheConfig::default());
        let line = Line::new(6).unwrap();

        let (first, second) = tokio::join!(planner.solve(line, 2), planner.solve(line, 2));
        let (first, second) = (first.unwrap(), second.unwrap());

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, Planner::new(&line).solve(2).unwrap());
    }

    #[tokio::test]
    async fn keys_separate_lines_and_budgets() {
        let planner = CachedPlanner::new(&CacheConfig::default());

        let a = planner.solve(Line::new(4).unwrap(), 0).await.unwrap();
        let b = planner.solve(Line::new(4).unwrap(), 1).await.unwrap();
        let c = planner.solve(Line::new(3).unwrap(), 0).await.unwrap();

        assert_eq!(a.total_ride(), Some(9));
        assert_eq!(b.total_ride(), Some(10));
        assert_eq!(c.total_ride(), Some(5));
    }

    #[tokio::test]
    async fn sweep_in_order() {
        let planner = CachedPlanner::new(&CacheConfig::default());
        let results = planner.sweep(Line::default(), 0..=3).await.unwrap();

        let rides: Vec<Option<u32>> = results.iter().map(|r| r.total_ride()).collect();
        assert_eq!(rides, vec![Some(27), Some(31), Some(33), Some(33)]);
    }
}
