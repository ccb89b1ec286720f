//! Collaborator seams for identity and role-name resolution

use async_trait::async_trait;

use super::context::AccessContext;
use crate::utils::error::Result;

/// Resolves the identity performing the current operation.
///
/// The engine treats the produced identity as opaque; it is only handed on
/// to the role-name provider and the capabilities. Implementations typically
/// wrap a session store, a token parser or a request extension lookup.
#[async_trait]
pub trait IdentityProvider<I>: Send + Sync {
    /// Resolve the current identity from the call context
    async fn resolve(&self, ctx: &AccessContext) -> Result<I>;
}

/// Resolves the role name an identity acts under.
///
/// The returned name is used as a key into the policy's role registry.
#[async_trait]
pub trait RoleNameProvider<I>: Send + Sync {
    /// Resolve the role name for the given identity
    async fn resolve(&self, identity: &I, ctx: &AccessContext) -> Result<String>;
}

/// Identity provider backed by a plain function
pub struct IdentityFn<F>(F);

impl<F> IdentityFn<F> {
    /// Wrap a function as an identity provider
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<I, F> IdentityProvider<I> for IdentityFn<F>
where
    I: Send,
    F: Fn(&AccessContext) -> Result<I> + Send + Sync,
{
    async fn resolve(&self, ctx: &AccessContext) -> Result<I> {
        (self.0)(ctx)
    }
}

/// Role-name provider backed by a plain function
pub struct RoleNameFn<F>(F);

impl<F> RoleNameFn<F> {
    /// Wrap a function as a role-name provider
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<I, F> RoleNameProvider<I> for RoleNameFn<F>
where
    I: Sync,
    F: Fn(&I, &AccessContext) -> Result<String> + Send + Sync,
{
    async fn resolve(&self, identity: &I, ctx: &AccessContext) -> Result<String> {
        (self.0)(identity, ctx)
    }
}
