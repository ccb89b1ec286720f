//! Role-based access-control decision engine
//!
//! This module provides the policy-resolution and permission-check/filter
//! protocol: a [`Policy`] resolves the current identity and its [`Role`],
//! then dispatches to the [`Capability`] registered for the requested
//! permission.

mod capability;
mod context;
mod engine;
mod providers;
mod role;
mod types;

// Re-export public types and structs
pub use capability::{Allow, Capability, Deny, FnCapability};
pub use context::AccessContext;
pub use engine::Policy;
pub use providers::{IdentityFn, IdentityProvider, RoleNameFn, RoleNameProvider};
pub use role::Role;
pub use types::{AccessDecision, Permission};
