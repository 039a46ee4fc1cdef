//! `shop` and `calculator` commands.

use anyhow::{Context as _, Result};
use axum::Router;
use shop_api::{CalculatorState, ShopState};
use shop_observability::{LogConfig, RequestId};
use tokio::net::TcpListener;

use super::ServeArgs;
use crate::context::Context;

/// Serve the shop API until Ctrl-C.
pub async fn shop(args: ServeArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    args.apply(
        &mut config.shop.host,
        &mut config.shop.port,
        &mut config.logging,
    );

    let state = ShopState::new(config.logging).context("Failed to create metrics registry")?;
    let router = shop_api::shop_router(state);
    serve("shop", router, &config.shop.host, config.shop.port, config.logging, ctx).await
}

/// Serve the calculator API until Ctrl-C.
pub async fn calculator(args: ServeArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    args.apply(
        &mut config.calculator.host,
        &mut config.calculator.port,
        &mut config.logging,
    );

    let limits = config.calculator.limits();
    let state = CalculatorState::new(limits, config.logging)
        .context("Failed to create metrics registry")?;
    let router = shop_api::calculator_router(state);

    serve(
        "calculator",
        router,
        &config.calculator.host,
        config.calculator.port,
        config.logging,
        ctx,
    )
    .await
}

async fn serve(
    service: &'static str,
    router: Router,
    host: &str,
    port: u16,
    logging: LogConfig,
    ctx: &Context,
) -> Result<()> {
    ctx.output.header(&format!("{service} service"));
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    ctx.output
        .success(&format!("{service} listening on http://{addr}"));
    ctx.output.kv("log level", &logging.level.to_string().to_lowercase());
    let log = logging
        .logger(RequestId::generate())
        .with_service(service);
    log.info_builder("Server started")
        .field("addr", addr.to_string())
        .emit();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log.info("Server stopped");
    ctx.output.info("Shut down cleanly");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server runs
/// until killed.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
