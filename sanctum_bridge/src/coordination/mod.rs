mod bridge;
mod errors;

pub use bridge::{AuthBridge, LoginOutcome};
pub use errors::BridgeError;
