use std::collections::HashMap;

use tokio::sync::RwLock;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Paywall/analytics SDK that must know who the current user is.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn identify(&self, user_id: &str) -> nutrio_shared::Result<()>;
    async fn reset(&self) -> nutrio_shared::Result<()>;
}

/// Provider used when no SDK is configured.
#[derive(Default, Clone, Copy)]
pub struct LogIdentityProvider;

#[async_trait::async_trait]
impl IdentityProvider for LogIdentityProvider {
    #[tracing::instrument(skip(self))]
    async fn identify(&self, user_id: &str) -> nutrio_shared::Result<()> {
        tracing::info!("identify user");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn reset(&self) -> nutrio_shared::Result<()> {
        tracing::info!("reset identity");

        Ok(())
    }
}

/// Backend client whose requests carry the user id.
#[async_trait::async_trait]
pub trait RemoteClient: Send + Sync {
    async fn set_user_id(&self, user_id: Option<&str>);
}

/// Global headers attached to every backend request.
#[derive(Default)]
pub struct RequestHeaders(RwLock<HashMap<String, String>>);

impl RequestHeaders {
    pub async fn headers(&self) -> HashMap<String, String> {
        self.0.read().await.clone()
    }

    pub async fn user_id(&self) -> Option<String> {
        self.0.read().await.get(USER_ID_HEADER).cloned()
    }
}

#[async_trait::async_trait]
impl RemoteClient for RequestHeaders {
    async fn set_user_id(&self, user_id: Option<&str>) {
        let mut headers = self.0.write().await;

        match user_id {
            Some(id) => {
                headers.insert(USER_ID_HEADER.to_owned(), id.to_owned());
            }
            None => {
                headers.remove(USER_ID_HEADER);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn headers_follow_user_id() {
        let headers = RequestHeaders::default();

        headers.set_user_id(Some("abc")).await;
        assert_eq!(headers.user_id().await.as_deref(), Some("abc"));
        assert_eq!(headers.headers().await.len(), 1);

        headers.set_user_id(None).await;
        assert!(headers.headers().await.is_empty());
    }
}
