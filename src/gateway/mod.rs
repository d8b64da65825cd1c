//! Data gateway for dashboard records
//!
//! [`DataGateway`] is the boundary to the hosted backend. [`AuthorizedGateway`]
//! wraps any gateway and enforces the current role's capabilities before a
//! call reaches it, so the checks do not depend on the UI hiding buttons.

mod authorized;
mod memory;
mod types;

pub use authorized::AuthorizedGateway;
pub use memory::InMemoryGateway;
pub use types::{DataGateway, Record};
