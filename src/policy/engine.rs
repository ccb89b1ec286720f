//! The policy decision engine

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::capability::Capability;
use super::context::AccessContext;
use super::providers::{IdentityProvider, RoleNameProvider};
use super::role::Role;
use super::types::{AccessDecision, Permission};
use crate::config::{PolicyConfig, Validate};
use crate::utils::error::{AccessError, Result};

/// Access-control policy over a set of roles and an optional permission set.
///
/// The policy is a stateless decision function: it is immutable after
/// construction, caches nothing between calls, and re-resolves identity and
/// role on every `check`/`filter`. Concurrent use from multiple tasks needs
/// no locking.
///
/// `I` is the identity type produced by the identity provider, `O` the
/// object type handled by `filter`.
pub struct Policy<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    roles: HashMap<String, Role<I, O>>,
    permissions: Option<HashMap<String, Permission>>,
    identity_provider: Arc<dyn IdentityProvider<I>>,
    role_name_provider: Arc<dyn RoleNameProvider<I>>,
}

impl<I, O> Policy<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    /// Create a policy from roles, collaborators and an optional permission set.
    ///
    /// Roles are registered in order; a duplicate role name aborts
    /// construction. `permissions` controls validation of requested
    /// permission names: `None` disables the validation entirely, while an
    /// empty list means no permission name is valid.
    pub fn new(
        roles: Vec<Role<I, O>>,
        identity_provider: impl IdentityProvider<I> + 'static,
        role_name_provider: impl RoleNameProvider<I> + 'static,
        permissions: Option<Vec<Permission>>,
    ) -> Result<Self> {
        info!("Initializing access policy");

        let mut registry: HashMap<String, Role<I, O>> = HashMap::with_capacity(roles.len());
        for role in roles {
            if role.name().is_empty() {
                return Err(AccessError::config("Role name cannot be empty"));
            }
            if registry.contains_key(role.name()) {
                return Err(AccessError::DuplicateRole(role.name().to_string()));
            }
            registry.insert(role.name().to_string(), role);
        }

        let permissions = match permissions {
            Some(declared) => {
                let mut set = HashMap::with_capacity(declared.len());
                for permission in declared {
                    if permission.name().is_empty() {
                        return Err(AccessError::config("Permission name cannot be empty"));
                    }
                    set.insert(permission.name().to_string(), permission);
                }
                Some(set)
            }
            None => None,
        };

        debug!(
            "Registered {} roles, declared permissions: {}",
            registry.len(),
            permissions
                .as_ref()
                .map_or_else(|| "unrestricted".to_string(), |u| u.len().to_string()),
        );

        Ok(Self {
            roles: registry,
            permissions,
            identity_provider: Arc::new(identity_provider),
            role_name_provider: Arc::new(role_name_provider),
        })
    }

    /// Build a policy from a declarative configuration.
    ///
    /// `bind` supplies the capability for each `(role name, permission name)`
    /// pair the configuration declares.
    pub fn from_config(
        config: &PolicyConfig,
        identity_provider: impl IdentityProvider<I> + 'static,
        role_name_provider: impl RoleNameProvider<I> + 'static,
        mut bind: impl FnMut(&str, &str) -> Arc<dyn Capability<I, O>>,
    ) -> Result<Self> {
        config.validate()?;

        let mut roles = Vec::with_capacity(config.roles.len());
        for role_config in &config.roles {
            let mut role = Role::new(role_config.name.clone());
            for grant in &role_config.grants {
                role = role.grant_shared(grant.clone(), bind(&role_config.name, grant));
            }
            roles.push(role);
        }

        Self::new(
            roles,
            identity_provider,
            role_name_provider,
            config.permissions.clone(),
        )
    }

    /// Resolve the current identity through the identity provider
    pub async fn get_identity(&self, ctx: &AccessContext) -> Result<I> {
        self.identity_provider.resolve(ctx).await
    }

    /// Resolve the role for an identity.
    ///
    /// Asks the role-name provider for a name and looks it up in the role
    /// registry. There is no fallback role; an unregistered name is
    /// [`AccessError::RoleNotFound`].
    pub async fn get_role(&self, identity: &I, ctx: &AccessContext) -> Result<&Role<I, O>> {
        let name = self.role_name_provider.resolve(identity, ctx).await?;
        self.roles.get(&name).ok_or(AccessError::RoleNotFound(name))
    }

    /// Check whether the current identity holds the permission.
    ///
    /// The requested name is validated against the declared permission set
    /// first: an unknown permission is a programming error and surfaces as
    /// [`AccessError::PermissionNotFound`]. An identity whose role name is
    /// not registered is an expected runtime condition and simply denies;
    /// only that failure is swallowed, every other collaborator error
    /// propagates.
    pub async fn check(&self, permission: &str, ctx: &AccessContext) -> Result<bool> {
        self.ensure_declared(permission)?;

        let identity = self.get_identity(ctx).await?;
        let role = match self.get_role(&identity, ctx).await {
            Ok(role) => role,
            Err(AccessError::RoleNotFound(name)) => {
                debug!("No role named `{}` is registered, denying `{}`", name, permission);
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        Ok(role.check(&identity, permission, ctx).await)
    }

    /// Check the permission and report which role decided and why.
    pub async fn check_detailed(
        &self,
        permission: &str,
        ctx: &AccessContext,
    ) -> Result<AccessDecision> {
        self.ensure_declared(permission)?;

        let identity = self.get_identity(ctx).await?;
        let role = match self.get_role(&identity, ctx).await {
            Ok(role) => role,
            Err(AccessError::RoleNotFound(name)) => {
                return Ok(AccessDecision::denied(
                    None,
                    format!("no role named `{}` is registered", name),
                ));
            }
            Err(err) => return Err(err),
        };

        if !role.has_grant(permission) {
            return Ok(AccessDecision::denied(
                Some(role.name()),
                format!("role `{}` does not grant `{}`", role.name(), permission),
            ));
        }

        if role.check(&identity, permission, ctx).await {
            Ok(AccessDecision::granted_by(role.name()))
        } else {
            Ok(AccessDecision::denied(
                Some(role.name()),
                format!("denied by the `{}` capability", permission),
            ))
        }
    }

    /// Filter objects down to those the current identity may access.
    ///
    /// Permission-name validation matches [`check`](Self::check). Role
    /// resolution does not: filtering with no resolvable role is ambiguous,
    /// so [`AccessError::RoleNotFound`] propagates to the caller here
    /// instead of being treated as a deny.
    pub async fn filter(
        &self,
        permission: &str,
        objects: Vec<O>,
        ctx: &AccessContext,
    ) -> Result<Vec<O>> {
        self.ensure_declared(permission)?;

        let identity = self.get_identity(ctx).await?;
        let role = self.get_role(&identity, ctx).await?;
        role.filter(&identity, permission, objects, ctx).await
    }

    /// Get a registered role by name
    pub fn role(&self, name: &str) -> Option<&Role<I, O>> {
        self.roles.get(name)
    }

    /// List all registered roles
    pub fn list_roles(&self) -> Vec<&Role<I, O>> {
        self.roles.values().collect()
    }

    /// List the declared permissions, if a permission set is configured
    pub fn list_permissions(&self) -> Option<Vec<&Permission>> {
        self.permissions
            .as_ref()
            .map(|declared| declared.values().collect())
    }

    /// Validate a requested permission name against the declared set.
    ///
    /// No declared set means no validation at all.
    fn ensure_declared(&self, permission: &str) -> Result<()> {
        match &self.permissions {
            Some(declared) if !declared.contains_key(permission) => {
                Err(AccessError::PermissionNotFound(permission.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl<I, O> Clone for Policy<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            roles: self.roles.clone(),
            permissions: self.permissions.clone(),
            identity_provider: Arc::clone(&self.identity_provider),
            role_name_provider: Arc::clone(&self.role_name_provider),
        }
    }
}

impl<I, O> fmt::Debug for Policy<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("roles", &self.roles.keys().collect::<Vec<_>>())
            .field(
                "permissions",
                &self
                    .permissions
                    .as_ref()
                    .map(|declared| declared.keys().collect::<Vec<_>>()),
            )
            .finish_non_exhaustive()
    }
}
