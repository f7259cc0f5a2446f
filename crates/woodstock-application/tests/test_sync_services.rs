use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use woodstock_application::{ProfileEnrichmentService, RepsSyncService, SyncReport};
use woodstock_core::WoodstockError;
use woodstock_core::error::Result;
use woodstock_core::group::GroupRepository;
use woodstock_core::lookup::{
    DirectoryLookup, DirectoryRecord, LookupOutcome, RepProfile, RepRecord, RepsLookup,
};
use woodstock_core::profile::{MozillianProfile, ProfileRepository};
use woodstock_infrastructure::JsonRecordStore;

/// In-memory directory that records every call it receives.
#[derive(Default)]
struct FakeDirectory {
    by_email: HashMap<String, DirectoryRecord>,
    by_username: HashMap<String, DirectoryRecord>,
    unreachable: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeDirectory {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryLookup for FakeDirectory {
    async fn find_by_email(&self, email: &str) -> Result<LookupOutcome<DirectoryRecord>> {
        self.calls.lock().unwrap().push(format!("email:{}", email));
        if self.unreachable.contains(email) {
            return Err(WoodstockError::transport("connection reset"));
        }
        Ok(self.by_email.get(email).cloned().into())
    }

    async fn find_by_username(&self, username: &str) -> Result<LookupOutcome<DirectoryRecord>> {
        self.calls.lock().unwrap().push(format!("username:{}", username));
        Ok(self.by_username.get(username).cloned().into())
    }
}

#[derive(Default)]
struct FakeReps {
    by_query: HashMap<String, RepRecord>,
}

#[async_trait]
impl RepsLookup for FakeReps {
    async fn search(&self, query: &str) -> Result<LookupOutcome<RepRecord>> {
        Ok(self.by_query.get(query).cloned().into())
    }
}

fn open_store(temp_dir: &TempDir) -> Arc<JsonRecordStore> {
    Arc::new(JsonRecordStore::with_path(temp_dir.path().join("store.json")))
}

async fn seed(store: &JsonRecordStore, email: &str, username: &str) -> MozillianProfile {
    let profile = MozillianProfile::new(email, username);
    ProfileRepository::create(store, &profile).await.unwrap();
    profile
}

async fn reload(store: &JsonRecordStore, id: &str) -> MozillianProfile {
    ProfileRepository::list_all(store)
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap()
}

fn record(email: &str, full_name: &str) -> DirectoryRecord {
    DirectoryRecord {
        email: Some(email.to_string()),
        full_name: Some(full_name.to_string()),
        ..DirectoryRecord::default()
    }
}

fn enrichment(directory: Arc<FakeDirectory>, store: Arc<JsonRecordStore>) -> ProfileEnrichmentService {
    ProfileEnrichmentService::new(directory, store.clone(), store)
}

#[tokio::test]
async fn test_email_match_skips_username_lookup() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let profile = seed(&store, "a@example.org", "alice").await;

    let mut directory = FakeDirectory::default();
    directory
        .by_email
        .insert("a@example.org".to_string(), record("a@example.org", "Alice"));
    let directory = Arc::new(directory);

    let report = enrichment(directory.clone(), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(directory.calls(), vec!["email:a@example.org"]);
    assert_eq!(report.updated, 1);
    assert_eq!(reload(&store, &profile.id).await.full_name, "Alice");
}

#[tokio::test]
async fn test_falls_back_to_username() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let profile = seed(&store, "old@example.org", "alice").await;

    let mut directory = FakeDirectory::default();
    directory
        .by_username
        .insert("alice".to_string(), record("new@example.org", "Alice"));
    let directory = Arc::new(directory);

    enrichment(directory.clone(), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(
        directory.calls(),
        vec!["email:old@example.org", "username:alice"]
    );
    let saved = reload(&store, &profile.id).await;
    assert_eq!(saved.email, "new@example.org");
    assert_eq!(saved.full_name, "Alice");
}

#[tokio::test]
async fn test_empty_username_is_not_looked_up() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    seed(&store, "a@example.org", "").await;

    let directory = Arc::new(FakeDirectory::default());

    let report = enrichment(directory.clone(), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(directory.calls(), vec!["email:a@example.org"]);
    assert_eq!(report.skipped, 1);
}

#[tokio::test]
async fn test_unmatched_profile_is_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let mut profile = MozillianProfile::new("a@example.org", "alice");
    profile.full_name = "Local Name".to_string();
    profile.city = "Athens".to_string();
    ProfileRepository::create(store.as_ref(), &profile)
        .await
        .unwrap();

    let report = enrichment(Arc::new(FakeDirectory::default()), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(
        report,
        SyncReport {
            processed: 1,
            updated: 0,
            skipped: 1,
            failed: 0,
        }
    );
    assert_eq!(reload(&store, &profile.id).await, profile);
}

#[tokio::test]
async fn test_groups_are_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let mut profile = MozillianProfile::new("a@example.org", "alice");
    let stale = GroupRepository::find_or_create_by_name(store.as_ref(), "stale")
        .await
        .unwrap();
    profile.set_groups([stale.id.clone()]);
    ProfileRepository::create(store.as_ref(), &profile)
        .await
        .unwrap();

    let mut directory = FakeDirectory::default();
    directory.by_email.insert(
        "a@example.org".to_string(),
        DirectoryRecord {
            groups: Some(vec!["l10n".to_string(), "qa".to_string()]),
            ..record("a@example.org", "Alice")
        },
    );

    enrichment(Arc::new(directory), store.clone())
        .sync_all()
        .await
        .unwrap();

    let saved = reload(&store, &profile.id).await;
    let ids: Vec<String> = saved.tracking_groups.iter().cloned().collect();
    let mut names: Vec<String> = GroupRepository::find_by_ids(store.as_ref(), &ids)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    names.sort();

    assert_eq!(names, vec!["l10n", "qa"]);
    assert!(!saved.tracking_groups.contains(&stale.id));
}

#[tokio::test]
async fn test_missing_groups_clears_membership() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let mut profile = MozillianProfile::new("a@example.org", "alice");
    profile.set_groups(["some-group-id".to_string()]);
    ProfileRepository::create(store.as_ref(), &profile)
        .await
        .unwrap();

    let mut directory = FakeDirectory::default();
    directory
        .by_email
        .insert("a@example.org".to_string(), record("a@example.org", "Alice"));

    enrichment(Arc::new(directory), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert!(reload(&store, &profile.id).await.tracking_groups.is_empty());
}

#[tokio::test]
async fn test_existing_group_is_reused() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    seed(&store, "a@example.org", "alice").await;
    seed(&store, "b@example.org", "bob").await;

    let mut directory = FakeDirectory::default();
    for email in ["a@example.org", "b@example.org"] {
        directory.by_email.insert(
            email.to_string(),
            DirectoryRecord {
                groups: Some(vec!["l10n".to_string()]),
                ..record(email, "Someone")
            },
        );
    }

    enrichment(Arc::new(directory), store.clone())
        .sync_all()
        .await
        .unwrap();

    let groups = GroupRepository::list_all(store.as_ref()).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "l10n");
}

#[tokio::test]
async fn test_lookup_failure_does_not_stop_batch() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    seed(&store, "down@example.org", "down").await;
    let rescued = seed(&store, "flaky@example.org", "carol").await;
    let reachable = seed(&store, "b@example.org", "bob").await;

    let mut directory = FakeDirectory::default();
    directory.unreachable.insert("down@example.org".to_string());
    directory.unreachable.insert("flaky@example.org".to_string());
    directory
        .by_username
        .insert("carol".to_string(), record("flaky@example.org", "Carol"));
    directory
        .by_email
        .insert("b@example.org".to_string(), record("b@example.org", "Bob"));
    let directory = Arc::new(directory);

    let report = enrichment(directory.clone(), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(
        report,
        SyncReport {
            processed: 3,
            updated: 2,
            skipped: 0,
            failed: 1,
        }
    );
    assert!(directory.calls().contains(&"username:carol".to_string()));
    assert_eq!(reload(&store, &rescued.id).await.full_name, "Carol");
    assert_eq!(reload(&store, &reachable.id).await.full_name, "Bob");
}

#[tokio::test]
async fn test_email_taken_by_other_profile_is_not_saved() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let alice = seed(&store, "a@example.org", "alice").await;
    let bob = seed(&store, "b@example.org", "bob").await;

    let mut directory = FakeDirectory::default();
    directory
        .by_username
        .insert("alice".to_string(), record("b@example.org", "Alice"));
    directory
        .by_email
        .insert("b@example.org".to_string(), record("b@example.org", "Bob"));

    let report = enrichment(Arc::new(directory), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.updated, 1);
    assert_eq!(reload(&store, &alice.id).await, alice);
    assert_eq!(reload(&store, &bob.id).await.email, "b@example.org");
}

#[tokio::test]
async fn test_country_code_is_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let profile = seed(&store, "a@example.org", "alice").await;

    let mut directory = FakeDirectory::default();
    directory.by_email.insert(
        "a@example.org".to_string(),
        DirectoryRecord {
            country: Some("us".to_string()),
            ..record("a@example.org", "Alice")
        },
    );

    enrichment(Arc::new(directory), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(
        reload(&store, &profile.id).await.country,
        "United states of america"
    );
}

#[tokio::test]
async fn test_hidden_full_name_null_or_absent() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let mut with_null = MozillianProfile::new("a@example.org", "alice");
    with_null.full_name = "Alice Local".to_string();
    let mut without_key = MozillianProfile::new("b@example.org", "bob");
    without_key.full_name = "Bob Local".to_string();
    for profile in [&with_null, &without_key] {
        ProfileRepository::create(store.as_ref(), profile)
            .await
            .unwrap();
    }

    let mut directory = FakeDirectory::default();
    directory.by_email.insert(
        "a@example.org".to_string(),
        serde_json::from_str(r#"{"email": "a@example.org", "full_name": null}"#).unwrap(),
    );
    directory.by_email.insert(
        "b@example.org".to_string(),
        serde_json::from_str(r#"{"email": "b@example.org"}"#).unwrap(),
    );

    enrichment(Arc::new(directory), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(reload(&store, &with_null.id).await.full_name, "Private Mozillian");
    assert_eq!(reload(&store, &without_key.id).await.full_name, "Private Mozillian");
}

#[tokio::test]
async fn test_explicit_empty_selection_syncs_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    seed(&store, "a@example.org", "alice").await;

    let directory = Arc::new(FakeDirectory::default());

    let report = enrichment(directory.clone(), store)
        .sync(Some(Vec::new()))
        .await
        .unwrap();

    assert_eq!(report, SyncReport::default());
    assert!(directory.calls().is_empty());
}

#[tokio::test]
async fn test_store_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    // Never persisted, so the save cannot find it.
    let detached = MozillianProfile::new("a@example.org", "alice");

    let mut directory = FakeDirectory::default();
    directory
        .by_email
        .insert("a@example.org".to_string(), record("a@example.org", "Alice"));

    let err = enrichment(Arc::new(directory), store)
        .sync(Some(vec![detached]))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_reps_display_name_copied() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let profile = seed(&store, "a@example.org", "alice").await;

    let mut reps = FakeReps::default();
    reps.by_query.insert(
        "a@example.org".to_string(),
        RepRecord {
            profile: Some(RepProfile {
                display_name: Some("alice_rep".to_string()),
            }),
        },
    );

    let report = RepsSyncService::new(Arc::new(reps), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(report.updated, 1);
    let saved = reload(&store, &profile.id).await;
    assert_eq!(saved.reps_display_name, "alice_rep");
    assert_eq!(
        saved.reps_profile_url().as_deref(),
        Some("https://reps.mozilla.org/u/alice_rep/")
    );
}

#[tokio::test]
async fn test_rep_without_display_name_keeps_value() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let mut profile = MozillianProfile::new("a@example.org", "alice");
    profile.reps_display_name = "kept".to_string();
    ProfileRepository::create(store.as_ref(), &profile)
        .await
        .unwrap();

    let mut reps = FakeReps::default();
    reps.by_query
        .insert("a@example.org".to_string(), RepRecord { profile: None });

    let report = RepsSyncService::new(Arc::new(reps), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(reload(&store, &profile.id).await.reps_display_name, "kept");
}

#[tokio::test]
async fn test_non_rep_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let profile = seed(&store, "a@example.org", "alice").await;

    let report = RepsSyncService::new(Arc::new(FakeReps::default()), store.clone())
        .sync_all()
        .await
        .unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(reload(&store, &profile.id).await, profile);
}
