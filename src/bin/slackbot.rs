//! Slack bot exchanging links with the links service.
//!
//! ```bash
//! export LINKS_URL="http://localhost:3000"
//! export SLACK_VERIFICATION_TOKEN="..."
//! cargo run --bin links-slackbot
//! ```

use links::slackbot::{config::load_from_env, server};
use links::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_from_env()?;
    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}
