// handlers/protected/mod.rs - Protected handlers (portal session required)
//
// Each handler asks the injected SessionResolver for the session, and for a
// role where the route needs one, before touching the store.

pub mod auth;
pub mod offices;

pub use auth::me_get;
pub use offices::offices_get;
