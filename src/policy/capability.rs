//! Per-permission capability behavior

use async_trait::async_trait;

use super::context::AccessContext;

/// Behavior attached to a single permission within a role.
///
/// A capability answers two questions for the permission it is registered
/// under: may this identity act at all (`check`), and which of these objects
/// may it act on (`filter`). Implementations are supplied by the
/// application; the engine only dispatches to them.
///
/// `I` is the identity type produced by the identity provider, `O` the
/// object type being filtered.
#[async_trait]
pub trait Capability<I, O>: Send + Sync {
    /// Decide whether the identity holds this permission
    async fn check(&self, identity: &I, permission: &str, ctx: &AccessContext) -> bool;

    /// Reduce `objects` to those the identity may access under this permission
    async fn filter(
        &self,
        identity: &I,
        permission: &str,
        objects: Vec<O>,
        ctx: &AccessContext,
    ) -> Vec<O>;
}

/// Capability that grants unconditionally: checks pass and filters return
/// the objects untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Allow;

#[async_trait]
impl<I, O> Capability<I, O> for Allow
where
    I: Sync,
    O: Send + 'static,
{
    async fn check(&self, _identity: &I, _permission: &str, _ctx: &AccessContext) -> bool {
        true
    }

    async fn filter(
        &self,
        _identity: &I,
        _permission: &str,
        objects: Vec<O>,
        _ctx: &AccessContext,
    ) -> Vec<O> {
        objects
    }
}

/// Capability that denies unconditionally: checks fail and filters return
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deny;

#[async_trait]
impl<I, O> Capability<I, O> for Deny
where
    I: Sync,
    O: Send + 'static,
{
    async fn check(&self, _identity: &I, _permission: &str, _ctx: &AccessContext) -> bool {
        false
    }

    async fn filter(
        &self,
        _identity: &I,
        _permission: &str,
        _objects: Vec<O>,
        _ctx: &AccessContext,
    ) -> Vec<O> {
        Vec::new()
    }
}

/// Capability backed by a pair of plain functions.
///
/// Convenient for applications and tests that want to register behavior
/// without writing a trait implementation.
pub struct FnCapability<C, F> {
    check_fn: C,
    filter_fn: F,
}

impl<C, F> FnCapability<C, F> {
    /// Create a capability from a check function and a filter function
    pub fn new(check_fn: C, filter_fn: F) -> Self {
        Self {
            check_fn,
            filter_fn,
        }
    }
}

#[async_trait]
impl<I, O, C, F> Capability<I, O> for FnCapability<C, F>
where
    I: Sync,
    O: Send + 'static,
    C: Fn(&I, &str, &AccessContext) -> bool + Send + Sync,
    F: Fn(&I, &str, Vec<O>, &AccessContext) -> Vec<O> + Send + Sync,
{
    async fn check(&self, identity: &I, permission: &str, ctx: &AccessContext) -> bool {
        (self.check_fn)(identity, permission, ctx)
    }

    async fn filter(
        &self,
        identity: &I,
        permission: &str,
        objects: Vec<O>,
        ctx: &AccessContext,
    ) -> Vec<O> {
        (self.filter_fn)(identity, permission, objects, ctx)
    }
}
