use std::sync::Arc;

use teloxide::Bot;
use tracing::{error, info};

use hwb_core::{config::Config, watcher::StatusWatcher};
use hwb_practicum::PracticumClient;
use hwb_telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), hwb_core::Error> {
    hwb_core::logging::init()?;

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            // Nothing to do without credentials; abort before the loop.
            error!("cannot start: {e}");
            return Err(e);
        }
    };

    let api = Arc::new(PracticumClient::new(
        cfg.endpoint.clone(),
        cfg.practicum_token.clone(),
    ));
    let notifier = Arc::new(TelegramNotifier::new(Bot::new(cfg.telegram_token.clone())));

    info!("homework status watcher started");
    let mut watcher = StatusWatcher::new(cfg.telegram_chat_id, api, notifier);
    watcher.run().await;

    Ok(())
}
