//! End-to-end tests: declarative configuration, provider wiring and
//! concurrent use of a shared policy.

use std::sync::Arc;

use mockall::mock;
use rolegate::{
    AccessContext, AccessError, Allow, Capability, FnCapability, IdentityFn, IdentityProvider,
    Permission, Policy, PolicyConfig, Result, Role, RoleNameFn, RoleNameProvider,
};

const POLICY_YAML: &str = r#"
permissions:
  - post.view
  - post.edit
roles:
  - name: viewer
    grants: [post.view]
  - name: editor
    grants: [post.view, post.edit]
"#;

#[derive(Debug, Clone)]
struct User {
    id: u64,
    role: String,
}

fn identities(id: u64, role: &str) -> impl IdentityProvider<User> + use<> {
    let role = role.to_string();
    IdentityFn::new(move |_ctx: &AccessContext| {
        Ok(User {
            id,
            role: role.clone(),
        })
    })
}

fn role_names() -> impl RoleNameProvider<User> {
    RoleNameFn::new(|user: &User, _ctx: &AccessContext| Ok(user.role.clone()))
}

fn build_policy(role: &str) -> Policy<User, u64> {
    let config = PolicyConfig::from_yaml(POLICY_YAML).unwrap();
    Policy::from_config(
        &config,
        identities(1, role),
        role_names(),
        |_role: &str, _grant: &str| -> Arc<dyn Capability<User, u64>> { Arc::new(Allow) },
    )
    .unwrap()
}

#[tokio::test]
async fn test_config_driven_checks() {
    let ctx = AccessContext::new();

    let viewer = build_policy("viewer");
    assert!(viewer.check("post.view", &ctx).await.unwrap());
    assert!(!viewer.check("post.edit", &ctx).await.unwrap());

    let editor = build_policy("editor");
    assert!(editor.check("post.view", &ctx).await.unwrap());
    assert!(editor.check("post.edit", &ctx).await.unwrap());
}

#[tokio::test]
async fn test_config_driven_undeclared_permission() {
    let policy = build_policy("viewer");

    let err = policy
        .check("post.delete", &AccessContext::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::PermissionNotFound(_)));
}

#[tokio::test]
async fn test_config_driven_filtering() {
    let config = PolicyConfig::from_yaml(POLICY_YAML).unwrap();
    let policy: Policy<User, u64> = Policy::from_config(
        &config,
        identities(7, "editor"),
        role_names(),
        |_role: &str, grant: &str| -> Arc<dyn Capability<User, u64>> {
            match grant {
                // Editing is only allowed on objects the identity does not own
                "post.edit" => Arc::new(FnCapability::new(
                    |_user: &User, _permission: &str, _ctx: &AccessContext| true,
                    |user: &User, _permission: &str, objects: Vec<u64>, _ctx: &AccessContext| {
                        objects.into_iter().filter(|id| *id != user.id).collect()
                    },
                )),
                _ => Arc::new(Allow),
            }
        },
    )
    .unwrap();

    let filtered = policy
        .filter("post.edit", vec![3, 7, 11], &AccessContext::new())
        .await
        .unwrap();
    assert_eq!(filtered, vec![3, 11]);

    let unfiltered = policy
        .filter("post.view", vec![3, 7, 11], &AccessContext::new())
        .await
        .unwrap();
    assert_eq!(unfiltered, vec![3, 7, 11]);
}

#[tokio::test]
async fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.yaml");
    std::fs::write(&path, POLICY_YAML).unwrap();

    let config = PolicyConfig::from_file(&path).await.unwrap();

    assert_eq!(config.permissions.as_ref().unwrap().len(), 2);
    assert_eq!(config.roles.len(), 2);
    assert_eq!(config.roles[0].name, "viewer");
    assert_eq!(config.roles[1].grants, vec!["post.view", "post.edit"]);
}

#[tokio::test]
async fn test_missing_config_file_is_config_error() {
    let err = PolicyConfig::from_file("/nonexistent/policy.yaml")
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::Config(_)));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let err = PolicyConfig::from_yaml("roles: [").unwrap_err();

    assert!(matches!(err, AccessError::Config(_)));
}

#[test]
fn test_duplicate_role_in_config_rejected() {
    let yaml = "roles:\n  - name: admin\n  - name: admin\n";

    let err = PolicyConfig::from_yaml(yaml).unwrap_err();

    assert!(matches!(err, AccessError::DuplicateRole(name) if name == "admin"));
}

#[test]
fn test_permission_list_accepts_bare_names() {
    let yaml = "permissions: [post.view]\nroles: []\n";

    let config = PolicyConfig::from_yaml(yaml).unwrap();

    assert_eq!(
        config.permissions.unwrap(),
        vec![Permission::new("post.view")]
    );
}

mock! {
    Identities {}

    #[async_trait::async_trait]
    impl IdentityProvider<u64> for Identities {
        async fn resolve(&self, ctx: &AccessContext) -> Result<u64>;
    }
}

mock! {
    RoleNames {}

    #[async_trait::async_trait]
    impl RoleNameProvider<u64> for RoleNames {
        async fn resolve(&self, identity: &u64, ctx: &AccessContext) -> Result<String>;
    }
}

#[tokio::test]
async fn test_providers_are_consulted_on_every_call() {
    let mut identity_provider = MockIdentities::new();
    identity_provider
        .expect_resolve()
        .times(2)
        .returning(|_| Ok(7));

    let mut role_name_provider = MockRoleNames::new();
    role_name_provider
        .expect_resolve()
        .times(2)
        .returning(|_, _| Ok("viewer".to_string()));

    let policy: Policy<u64, u32> = Policy::new(
        vec![Role::new("viewer").grant("post.view", Allow)],
        identity_provider,
        role_name_provider,
        None,
    )
    .unwrap();

    // Nothing is cached between calls; the expectations above verify both
    // providers run once per check.
    let ctx = AccessContext::new();
    assert!(policy.check("post.view", &ctx).await.unwrap());
    assert!(policy.check("post.view", &ctx).await.unwrap());
}

#[tokio::test]
async fn test_role_name_provider_receives_resolved_identity() {
    let mut identity_provider = MockIdentities::new();
    identity_provider.expect_resolve().returning(|_| Ok(42));

    let mut role_name_provider = MockRoleNames::new();
    role_name_provider
        .expect_resolve()
        .withf(|identity, _ctx| *identity == 42)
        .returning(|_, _| Ok("viewer".to_string()));

    let policy: Policy<u64, u32> = Policy::new(
        vec![Role::new("viewer").grant("post.view", Allow)],
        identity_provider,
        role_name_provider,
        None,
    )
    .unwrap();

    assert!(policy.check("post.view", &AccessContext::new()).await.unwrap());
}

#[tokio::test]
async fn test_concurrent_checks_on_shared_policy() {
    let policy = Arc::new(build_policy("editor"));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let policy = Arc::clone(&policy);
        handles.push(tokio::spawn(async move {
            policy
                .check("post.edit", &AccessContext::new())
                .await
                .unwrap()
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}
