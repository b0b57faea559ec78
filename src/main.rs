use std::sync::Arc;

mod api;
mod config;
mod handler;
mod http;
mod logger;
mod router;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    // Routes are registered once here; the registry is read-only afterwards
    let shared_cfg = Arc::new(cfg.clone());
    let router = api::build_router(&shared_cfg);

    logger::log_server_start(&addr, &cfg, router.route_count());

    let state = Arc::new(config::AppState::new(cfg, router));
    server::run(listener, state).await;

    Ok(())
}
