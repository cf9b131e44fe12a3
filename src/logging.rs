use crate::errors::CountdownError;
use log::{debug, info, warn};

/// Honour `RUST_LOG`, default to `info`.
pub fn init() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = env_logger::try_init();
}

pub fn log_invalid_end(auction_id: &str, err: &CountdownError) {
    warn!("⚠️ Auction {} has an unreadable end date — {}", auction_id, err);
}

pub fn log_auction_ended(auction_id: &str, title: &str) {
    info!("⏰ Auction {} ({}) has ended", auction_id, title);
}

pub fn log_tick(running: usize, total: usize) {
    debug!("🔄 Tick — {} of {} auctions still running", running, total);
}
