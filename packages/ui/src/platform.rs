//! Platform wiring: where tokens live, where config comes from, and how the
//! backend URL is found.
//!
//! - **Web** (WASM + `web` feature): `localStorage`, the page origin, and the
//!   compile-time `FLUX_API_URL`.
//! - **Native**: one file per key under `<data_dir>/flux/`, and an optional
//!   `<data_dir>/flux/flux.toml`.

use api::ApiEnvironment;
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type ClientStorage = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type ClientStorage = store::FileStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("flux")
}

/// The platform's durable key/value store.
pub fn make_storage() -> ClientStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::new(data_dir())
    }
}

/// Read `flux.toml`. A missing or malformed file yields the defaults.
pub fn load_config() -> ClientConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ClientConfig::default()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let path = data_dir().join(ClientConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => ClientConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                ClientConfig::default()
            }),
            Err(_) => ClientConfig::default(),
        }
    }
}

/// What this build knows about its backend.
pub fn api_environment(config: &ClientConfig) -> ApiEnvironment {
    let configured_url = config
        .api
        .base_url
        .clone()
        .or_else(|| option_env!("FLUX_API_URL").map(str::to_string));

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let origin = None;

    ApiEnvironment {
        configured_url,
        origin,
        development: cfg!(debug_assertions),
    }
}
