use blog_backend::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    let log_level = telemetry::init(&config.log_level, &config.log_format)?;

    config.print_summary();

    server::run(config, log_level).await
}
