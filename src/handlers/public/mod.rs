// handlers/public/mod.rs - Public handlers (no session required)

pub mod cities;
pub mod health;

pub use cities::cities_get;
pub use health::health_get;
