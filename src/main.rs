use auction_countdown::*;

use anyhow::Result;
use catalog::AuctionCatalog;
use clap::Parser;
use colored::Colorize;
use config::{Args, Config};
use domain::{Auction, Clock, SystemClock};
use log::info;
use monitor::{CountdownLine, CountdownMonitor, CountdownSnapshot};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    info!("🚀 Starting auction countdown");

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    // ===============================
    // CATALOG
    // ===============================
    let clock = SystemClock;
    let now = clock.now();
    let catalog = AuctionCatalog::load_or_sample(&config.catalog.auctions_path, now)?;

    let auctions: Vec<Auction> = catalog.active().cloned().collect();
    let open = auctions.iter().filter(|a| a.is_open(now)).count();
    info!(
        "📦 {} listings, {} active, {} open",
        catalog.auctions().len(),
        auctions.len(),
        open
    );

    let monitor = CountdownMonitor::new(auctions, clock, config.display.refresh_interval_ms);

    let placeholder = config.display.placeholder.clone();

    if args.once {
        render(&monitor.snapshot(), &placeholder);
        return Ok(());
    }

    // ===============================
    // MAIN LOOP
    // ===============================
    monitor
        .start_monitoring(|snapshot| {
            render(&snapshot, &placeholder);
            async {}
        })
        .await;

    Ok(())
}

fn render(snapshot: &CountdownSnapshot, placeholder: &str) {
    // Clear screen and move cursor to top
    print!("\x1B[2J\x1B[1;1H");

    println!("======================================================");
    println!("AUCTIONS - {}", snapshot.taken_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("======================================================");

    for line in &snapshot.lines {
        let bid = line
            .current_bid
            .map(|b| format!("{:.2}", b))
            .unwrap_or_else(|| "N/A".to_string());

        println!(
            "{:<10} | {:<24} | {:>10} | {}",
            line.auction_id,
            line.title,
            bid,
            colored_status(line, placeholder)
        );
    }

    println!("======================================================");
    println!("{} running", snapshot.running());
}

fn colored_status(line: &CountdownLine, placeholder: &str) -> String {
    let text = line.display(placeholder);
    if line.is_finished() {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}
