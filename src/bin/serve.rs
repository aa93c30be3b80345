use chopchop_bork::{utils::{init_tracing, log_config}, Config};

fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so read config before installing the subscriber
    let config = Config::from_env()?;
    init_tracing("info");
    log_config(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(chopchop_bork::start_server(config))
}
