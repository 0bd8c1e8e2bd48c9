// handlers/mod.rs - Handler tiers
//
// Public (no session) → Protected (portal session, optionally a role)

pub mod protected;
pub mod public;
