use std::sync::Arc;

use tokio::sync::watch;

use crate::{IdentityProvider, KeyValueStore, RemoteClient};

pub const USER_ID_KEY: &str = "user_id";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Not resolved yet.
    #[default]
    Unknown,
    SignedOut,
    SignedIn(String),
}

/// Anonymous device identity: a generated id kept in the secure store and
/// shared with the identity provider and the backend client.
pub struct UserManager {
    store: Arc<dyn KeyValueStore>,
    identity: Arc<dyn IdentityProvider>,
    client: Arc<dyn RemoteClient>,
    state: watch::Sender<AuthState>,
}

impl UserManager {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        identity: Arc<dyn IdentityProvider>,
        client: Arc<dyn RemoteClient>,
    ) -> Self {
        Self {
            store,
            identity,
            client,
            state: watch::Sender::new(AuthState::Unknown),
        }
    }

    pub async fn get_user_id(&self) -> nutrio_shared::Result<Option<String>> {
        self.store.get(USER_ID_KEY).await
    }

    pub async fn has_user_id(&self) -> nutrio_shared::Result<bool> {
        Ok(self.get_user_id().await?.is_some())
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Create a new id and register it everywhere. When the identity provider
    /// rejects it the stored id is removed again.
    #[tracing::instrument(skip(self))]
    pub async fn initialize_user(&self) -> nutrio_shared::Result<String> {
        let user_id = uuid::Uuid::new_v4().to_string();

        self.store.set(USER_ID_KEY, &user_id).await?;

        if let Err(err) = self.identity.identify(&user_id).await {
            tracing::error!(error = %err, "failed to identify user");

            if let Err(delete_err) = self.store.delete(USER_ID_KEY).await {
                tracing::error!(error = %delete_err, "failed to remove user id");
            }

            return Err(err);
        }

        self.client.set_user_id(Some(&user_id)).await;
        self.state.send_replace(AuthState::SignedIn(user_id.clone()));

        tracing::info!(user_id = %user_id, "user initialized");

        Ok(user_id)
    }

    /// Sign out locally, then reset the identity provider. A provider error
    /// is returned after the local sign-out has been published.
    #[tracing::instrument(skip(self))]
    pub async fn reset_user(&self) -> nutrio_shared::Result<()> {
        self.store.delete(USER_ID_KEY).await?;
        self.client.set_user_id(None).await;
        self.state.send_replace(AuthState::SignedOut);

        if let Err(err) = self.identity.reset().await {
            tracing::error!(error = %err, "failed to reset identity");

            return Err(err);
        }

        tracing::info!("user reset");

        Ok(())
    }

    /// Launch-time check of the stored id.
    pub async fn restore(&self) -> nutrio_shared::Result<AuthState> {
        let state = match self.get_user_id().await? {
            Some(user_id) => {
                self.client.set_user_id(Some(&user_id)).await;
                AuthState::SignedIn(user_id)
            }
            None => AuthState::SignedOut,
        };

        tracing::debug!(state = ?state, "auth state restored");
        self.state.send_replace(state.clone());

        Ok(state)
    }
}
