//! Route authorization gate.
//!
//! Decides, per protected region of the dashboard, whether to render it,
//! show a loading placeholder, or redirect. Supports:
//! - Role allow-lists per route (empty list = any authenticated role)
//! - Public-only routes (login, recovery) that bounce signed-in users
//! - Fail-fast route registration via [`RouteTable`]

mod decision;
mod evaluator;
mod policy;

pub use decision::Decision;
pub use evaluator::{authorize, authorize_public};
pub use policy::{RoutePolicy, RouteRule, RouteTable};

pub use crate::models::role::paths;
