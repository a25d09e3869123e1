pub mod mock_backend;

pub use mock_backend::{LoginReply, MockBackend, MockBackendConfig, unreachable_base_url};

use sanctum_bridge::{BackendClient, BackendConfig};

/// Backend client pointed at `base_url` with the default Sanctum paths
pub fn backend_client(base_url: &str) -> BackendClient {
    let config = BackendConfig::new(base_url).expect("Mock base url is valid");
    BackendClient::new(config).expect("Failed to build backend client")
}
