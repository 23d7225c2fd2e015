use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    config::ClientConfig,
    error::{ClientError, ConfigError},
    router::Route,
    storage::{platform_storage, PlatformTokenStorage},
    store::{Bearer, SessionState, SessionStore},
};

pub type AppSessionStore = SessionStore<ApiClient, PlatformTokenStorage>;

/// Collaborators shared with every view through context.
#[derive(Clone)]
pub struct AppContext {
    pub store: Rc<AppSessionStore>,
    pub api: ApiClient,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl AppContext {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let api = ApiClient::new(config)?;
        let store = SessionStore::new(api.clone(), platform_storage(config));

        Ok(Self {
            store: Rc::new(store),
            api,
        })
    }

    /// Bearer token for an authenticated request
    pub fn bearer(&self) -> Result<Bearer, ClientError> {
        self.store.bearer().ok_or(ClientError::NotAuthenticated)
    }

    /// Pass the result of a request made with `bearer` through, logging out if the API
    /// rejected the token.
    pub fn observe<T>(
        &self,
        bearer: &Bearer,
        result: Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        if let Err(ClientError::Unauthorized) = &result {
            tracing::warn!("API rejected the session token, logging out");
            self.store.reject(bearer);
        }
        result
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

#[component]
pub fn App() -> Element {
    let context = use_hook(|| {
        ClientConfig::from_env().and_then(|config| AppContext::from_config(&config))
    });

    match context {
        Ok(context) => rsx!(SessionProvider { context: context }),
        Err(e) => {
            tracing::error!("Invalid client configuration: {}", e);

            rsx!(
                div { class: "min-h-screen flex items-center justify-center",
                    div { class: "alert alert-error max-w-xl",
                        "Invalid client configuration: {e}"
                    }
                }
            )
        }
    }
}

/// Owns the session store for the lifetime of the app and mirrors its changes into the
/// [`SessionState`] signal.
#[component]
fn SessionProvider(context: AppContext) -> Element {
    let store = context.store.clone();
    use_context_provider(|| context.clone());
    let mut state = use_context_provider(|| Signal::new(SessionState::default()));

    use_hook({
        let store = store.clone();
        move || {
            spawn(async move {
                let mut changes = store.subscribe();
                store.init().await;

                let session = changes.borrow_and_update().clone();
                state.set(SessionState {
                    session,
                    restored: true,
                });

                while changes.changed().await.is_ok() {
                    let session = changes.borrow_and_update().clone();
                    state.write().session = session;
                }
            });
        }
    });

    use_drop(move || store.teardown());

    rsx!(Router::<Route> {})
}
