//! Aggregate queries for the dashboard.

use sqlx::PgPool;

use super::RepositoryError;

/// Counters shown on the dashboard overview.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_drivers: i64,
    pub total_companies: i64,
    pub active_requests: i64,
    pub completed_requests: i64,
    pub total_revenue: f64,
    pub pending_companies: i64,
    pub pending_drivers: i64,
    pub pending_trips: i64,
}

impl DashboardStats {
    /// Total number of items waiting on an admin decision.
    #[must_use]
    pub const fn total_pending(&self) -> i64 {
        self.pending_companies + self.pending_drivers + self.pending_trips
    }
}

async fn count(pool: &PgPool, query: &str) -> Result<i64, RepositoryError> {
    let n = sqlx::query_scalar::<_, i64>(query).fetch_one(pool).await?;
    Ok(n)
}

/// Collect all dashboard counters.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any query fails.
pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, RepositoryError> {
    let total_users = count(pool, "SELECT COUNT(*) FROM wassalni.users").await?;
    let total_drivers = count(pool, "SELECT COUNT(*) FROM wassalni.drivers").await?;
    let total_companies = count(pool, "SELECT COUNT(*) FROM wassalni.companies").await?;
    let active_requests = count(
        pool,
        "SELECT COUNT(*) FROM wassalni.requests WHERE status IN ('pending', 'accepted')",
    )
    .await?;
    let completed_requests = count(
        pool,
        "SELECT COUNT(*) FROM wassalni.requests WHERE status = 'completed'",
    )
    .await?;
    let total_revenue = sqlx::query_scalar::<_, f64>(
        r"
        SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION
        FROM wassalni.payments
        WHERE payment_status = 'completed'
        ",
    )
    .fetch_one(pool)
    .await?;
    let pending_companies = count(
        pool,
        "SELECT COUNT(*) FROM wassalni.companies WHERE is_approved = FALSE",
    )
    .await?;
    let pending_drivers = count(
        pool,
        "SELECT COUNT(*) FROM wassalni.drivers WHERE is_approved = FALSE",
    )
    .await?;
    let pending_trips = count(
        pool,
        "SELECT COUNT(*) FROM wassalni.trips WHERE status IN ('pending', 'active')",
    )
    .await?;

    Ok(DashboardStats {
        total_users,
        total_drivers,
        total_companies,
        active_requests,
        completed_requests,
        total_revenue,
        pending_companies,
        pending_drivers,
        pending_trips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pending_sums_all_queues() {
        let stats = DashboardStats {
            pending_companies: 2,
            pending_drivers: 3,
            pending_trips: 4,
            ..Default::default()
        };
        assert_eq!(stats.total_pending(), 9);
    }
}
