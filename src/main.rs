use std::sync::Arc;

mod config;
mod functions;
mod http;
mod logger;
mod router;
mod server;
#[cfg(test)]
mod test_util;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Build the Tokio runtime, honoring the configured worker thread count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        println!("[CONFIG] Using {workers} worker threads");
    } else {
        println!("[CONFIG] Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);

    if cfg.registry.lazy_init {
        logger::log_registry_deferred();
    } else {
        // Eager strategy: the registry was built in AppState::new, list it up front
        let registry = state.registry.get().await;
        if registry.is_empty() {
            logger::log_warning("No functions registered");
        }
        logger::log_registry_ready(&registry.entries());
    }

    server::run(listener, state).await;
    Ok(())
}
