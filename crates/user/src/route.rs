use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::AuthState;

/// Top-level area the user is currently in.
#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Area {
    Welcome,
    Onboarding,
    App,
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Route {
    Stay,
    Welcome,
    App,
}

/// Redirect applied whenever the auth state changes.
pub fn route_for(state: &AuthState, area: Area) -> Route {
    match (state, area) {
        (AuthState::SignedOut, Area::App) => Route::Welcome,
        (AuthState::SignedIn(_), Area::Welcome) => Route::App,
        _ => Route::Stay,
    }
}
