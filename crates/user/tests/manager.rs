use std::sync::Arc;

use nutrio_shared::Error;
use nutrio_user::{
    AuthState, KeyValueStore, MemoryStore, RequestHeaders, SqliteStore, USER_ID_KEY, UserManager,
};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn initialize_then_reset() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let mut auth = state.manager.subscribe();

    assert!(!state.manager.has_user_id().await?);

    let user_id = state.manager.initialize_user().await?;

    assert_eq!(user_id.len(), 36);
    assert_eq!(state.manager.get_user_id().await?, Some(user_id.clone()));
    assert_eq!(state.headers.user_id().await, Some(user_id.clone()));
    assert!(auth.has_changed()?);
    assert_eq!(*auth.borrow_and_update(), AuthState::SignedIn(user_id.clone()));

    state.manager.reset_user().await?;

    assert!(!state.manager.has_user_id().await?);
    assert_eq!(state.headers.user_id().await, None);
    assert_eq!(*auth.borrow_and_update(), AuthState::SignedOut);
    assert_eq!(
        *state.identity.calls.lock().await,
        vec![format!("identify:{user_id}"), "reset".to_owned()]
    );

    Ok(())
}

#[tokio::test]
async fn initialize_generates_new_ids() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let first = state.manager.initialize_user().await?;
    let second = state.manager.initialize_user().await?;

    assert_ne!(first, second);
    assert_eq!(state.manager.get_user_id().await?, Some(second));

    Ok(())
}

#[tokio::test]
async fn identity_failure_removes_stored_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_with_identity(
        dir.child("db.sqlite3"),
        helpers::RecordingIdentity::failing(),
    )
    .await?;

    assert!(state.manager.initialize_user().await.is_err());
    assert!(!state.manager.has_user_id().await?);
    assert_eq!(state.headers.user_id().await, None);
    assert_eq!(state.manager.state(), AuthState::Unknown);

    Ok(())
}

#[tokio::test]
async fn restore_reads_stored_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    assert_eq!(state.manager.restore().await?, AuthState::SignedOut);

    SqliteStore(state.pool.clone())
        .set(USER_ID_KEY, "existing")
        .await?;

    assert_eq!(
        state.manager.restore().await?,
        AuthState::SignedIn("existing".to_owned())
    );
    assert_eq!(state.headers.user_id().await.as_deref(), Some("existing"));

    Ok(())
}

#[tokio::test]
async fn identity_reset_failure_still_signs_out() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_with_identity(
        dir.child("db.sqlite3"),
        helpers::RecordingIdentity::failing_reset(),
    )
    .await?;

    state.manager.initialize_user().await?;

    assert!(matches!(
        state.manager.reset_user().await,
        Err(Error::Server(_))
    ));
    assert!(!state.manager.has_user_id().await?);
    assert_eq!(state.headers.user_id().await, None);
    assert_eq!(state.manager.state(), AuthState::SignedOut);

    Ok(())
}

/// Store whose deletes always fail.
#[derive(Default)]
struct StickyStore(MemoryStore);

#[async_trait::async_trait]
impl KeyValueStore for StickyStore {
    async fn get(&self, key: &str) -> nutrio_shared::Result<Option<String>> {
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> nutrio_shared::Result<()> {
        self.0.set(key, value).await
    }

    async fn delete(&self, _key: &str) -> nutrio_shared::Result<()> {
        Err(Error::Unknown(anyhow::anyhow!("disk is read-only")))
    }
}

#[tokio::test]
async fn identity_error_wins_over_cleanup_error() -> anyhow::Result<()> {
    let manager = UserManager::new(
        Arc::new(StickyStore::default()),
        Arc::new(helpers::RecordingIdentity::failing()),
        Arc::new(RequestHeaders::default()),
    );

    let err = manager.initialize_user().await.unwrap_err();

    assert!(matches!(err, Error::Server(ref message) if message == "paywall unavailable"));
    assert_eq!(manager.state(), AuthState::Unknown);

    Ok(())
}
