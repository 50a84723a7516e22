use nutrio_onboarding::Onboarding;
use nutrio_user::{Area, AuthState, Route, UserManager, route_for};

/// Application container: the device identity and the onboarding session.
pub struct App {
    user: UserManager,
    onboarding: Onboarding,
}

impl App {
    pub fn new(user: UserManager) -> Self {
        Self {
            user,
            onboarding: Onboarding::new(),
        }
    }

    pub fn user(&self) -> &UserManager {
        &self.user
    }

    pub fn onboarding(&self) -> &Onboarding {
        &self.onboarding
    }

    pub fn onboarding_mut(&mut self) -> &mut Onboarding {
        &mut self.onboarding
    }

    pub async fn restore(&self) -> nutrio_shared::Result<AuthState> {
        self.user.restore().await
    }

    /// Redirect for a user currently in `area`, from the latest auth state.
    pub fn route(&self, area: Area) -> Route {
        route_for(&self.user.state(), area)
    }

    /// Finish onboarding from its last step by creating the user.
    ///
    /// Failures are logged and leave the session incomplete on the last step.
    pub async fn complete_onboarding(&mut self) -> Option<String> {
        if self.onboarding.is_complete() {
            tracing::warn!("onboarding already completed");
            return None;
        }

        if !self.onboarding.is_last_step() {
            tracing::warn!(
                step = %self.onboarding.current_step(),
                "onboarding completed before its last step"
            );
            return None;
        }

        match self.user.initialize_user().await {
            Ok(user_id) => {
                self.onboarding.mark_complete();
                Some(user_id)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to initialize user");
                None
            }
        }
    }

    /// Sign out and start onboarding over. Onboarding restarts once the
    /// user is signed out, even when the identity provider failed to reset.
    pub async fn reset(&mut self) -> nutrio_shared::Result<()> {
        let result = self.user.reset_user().await;

        if self.user.state() == AuthState::SignedOut {
            self.onboarding.restart();
        }

        result
    }
}
