pub mod config;
pub mod errors;
pub mod gate;
pub mod models;
pub mod session;

// Re-export commonly used items for callers and tests
pub use config::GateConfig;
pub use gate::{authorize, authorize_public, Decision, RoutePolicy, RouteRule, RouteTable};
pub use models::role::Role;
pub use models::user::UserIdentity;
pub use session::{AuthContext, Session, SessionResolver, StaticResolver};
