use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A city together with the number of listings located in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CityWithCount {
    pub id: i32,
    pub name: String,
    pub count: i64,
}
