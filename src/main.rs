use std::str::FromStr;

use alias_shortener::config::load_from_env;
use alias_shortener::logging::{self, LogFormat};
use alias_shortener::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_from_env()?;

    logging::init(LogFormat::from_str(&config.log_format)?, &config.log_level)?;

    config.print_summary();

    server::run(config).await
}
