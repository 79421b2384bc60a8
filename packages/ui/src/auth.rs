//! Authentication context and hooks for the UI.

use api::{ApiClient, AuthState, Session};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::platform::{api_environment, make_storage, ClientStorage};

/// The session type every component shares.
pub type ClientSession = Session<ClientStorage>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared session. Clones share state.
pub fn use_session() -> ClientSession {
    use_context::<ClientSession>()
}

/// The client configuration the app was started with.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Copy the session into the auth signal after it changed.
pub fn sync_auth(session: &ClientSession, mut auth: Signal<AuthState>) {
    let snapshot = session.snapshot();
    if *auth.peek() != snapshot {
        auth.set(snapshot);
    }
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let session = use_hook(|| {
        let api = ApiClient::from_environment(&api_environment(&config));
        tracing::info!("Using backend {}", api.base_url());
        Session::new(api, make_storage())
    });
    let auth_state = use_signal(|| session.snapshot());

    // Validate the stored token once on mount
    let _ = use_resource({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move {
                session.bootstrap().await;
                sync_auth(&session, auth_state);
            }
        }
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| session.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let session = use_session();
    let auth_state = use_auth();

    let onclick = move |_| {
        let session = session.clone();
        async move {
            session.logout().await;
            sync_auth(&session, auth_state);
            on_logout.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
