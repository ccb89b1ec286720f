//! # rolegate
//!
//! Role-based access-control policy engine: resolve an identity's role,
//! check whether the role grants a named permission, and filter collections
//! of objects down to what the identity may access.
//!
//! ## Features
//!
//! - **Decision engine, not enforcement point**: call it from whatever
//!   boundary you choose (request handler, service call, data query)
//! - **Pluggable collaborators**: identity resolution, role-name resolution
//!   and per-permission behavior are injected, not implemented here
//! - **Strict error semantics**: an unknown permission name fails loudly, an
//!   identity without a registered role is a quiet deny on `check`
//! - **Stateless and lock-free**: policies are immutable after construction
//!   and safe to share across tasks
//! - **Declarative configuration**: describe roles and grants in YAML and
//!   bind capabilities in code
//!
//! ## Quick Start
//!
//! ```rust
//! use rolegate::{AccessContext, Allow, IdentityFn, Permission, Policy, Role, RoleNameFn};
//!
//! #[derive(Debug, Clone)]
//! struct User {
//!     role: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> rolegate::Result<()> {
//!     let viewer = Role::new("viewer").grant("post.view", Allow);
//!
//!     let policy: Policy<User, ()> = Policy::new(
//!         vec![viewer],
//!         IdentityFn::new(|_ctx: &AccessContext| {
//!             Ok(User { role: "viewer".to_string() })
//!         }),
//!         RoleNameFn::new(|user: &User, _ctx: &AccessContext| Ok(user.role.clone())),
//!         Some(vec![Permission::new("post.view"), Permission::new("post.edit")]),
//!     )?;
//!
//!     let ctx = AccessContext::new();
//!     assert!(policy.check("post.view", &ctx).await?);
//!     assert!(!policy.check("post.edit", &ctx).await?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod policy;
pub mod utils;

// Re-export main types
pub use config::{PolicyConfig, RoleConfig, Validate};
pub use policy::{
    AccessContext, AccessDecision, Allow, Capability, Deny, FnCapability, IdentityFn,
    IdentityProvider, Permission, Policy, Role, RoleNameFn, RoleNameProvider,
};
pub use utils::error::{AccessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
