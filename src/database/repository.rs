use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{CityWithCount, OfficeSummary};

/// Read access to portal data used by the route handlers
#[async_trait]
pub trait PortalStore: Send + Sync {
    /// Every city with the number of listings located in it
    async fn cities_with_counts(&self) -> Result<Vec<CityWithCount>, DatabaseError>;

    /// All offices in directory order
    async fn list_offices(&self) -> Result<Vec<OfficeSummary>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

const CITIES_WITH_COUNTS_SQL: &str = r#"
    SELECT c.id, c.name, COUNT(l.id) AS count
    FROM cities c
    LEFT JOIN listings l ON l.city_id = c.id
    GROUP BY c.id, c.name
    ORDER BY c.name ASC
"#;

// Keep in step with `Ord for OfficeSummary`
const LIST_OFFICES_SQL: &str = r#"
    SELECT id, name, brokerage_name
    FROM offices
    ORDER BY name ASC, brokerage_name ASC, id ASC
"#;

/// PostgreSQL-backed portal store
#[derive(Clone)]
pub struct PgPortalStore {
    pool: PgPool,
}

impl PgPortalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortalStore for PgPortalStore {
    async fn cities_with_counts(&self) -> Result<Vec<CityWithCount>, DatabaseError> {
        let cities = sqlx::query_as::<_, CityWithCount>(CITIES_WITH_COUNTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(cities)
    }

    async fn list_offices(&self) -> Result<Vec<OfficeSummary>, DatabaseError> {
        let offices = sqlx::query_as::<_, OfficeSummary>(LIST_OFFICES_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(offices)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
