use crate::api::routes;
use crate::config::SharedConfig;
use crate::provider::DynDnsProvider;
use axum::Router;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub dns: DynDnsProvider,
}

/// Build the application router. Public so tests can drive the API without
/// binding a socket.
#[must_use]
pub fn router(config: SharedConfig, dns: DynDnsProvider) -> Router {
    routes::new(AppState { config, dns })
}

/// Bind the configured address and serve the API.
pub fn new(config: SharedConfig, dns: DynDnsProvider) -> impl Future<Output = hyper::Result<()>> {
    let bind_addr = config.api_bind_addr;
    axum::Server::bind(&bind_addr).serve(router(config, dns).into_make_service())
}
