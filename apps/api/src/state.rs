use std::sync::Arc;

use crate::config::Config;
use crate::decoding::DocumentDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data: skill configuration travels with each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document decoder. Default: NativeDecoder.
    pub decoder: Arc<dyn DocumentDecoder>,
}
