use crate::domain::{Auction, Clock};
use crate::logging::{log_auction_ended, log_invalid_end, log_tick};
use chrono::{DateTime, Utc};
use log::info;
use rust_decimal::Decimal;
use tokio::time::{sleep, Duration};

/// Polls a clock and recomputes every auction's remaining time per tick.
pub struct CountdownMonitor<C: Clock> {
    auctions: Vec<Auction>,
    clock: C,
    check_interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownStatus {
    Remaining(String),
    Ended,
    /// End date text that could not be read; carries the reason.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownLine {
    pub auction_id: String,
    pub title: String,
    pub current_bid: Option<Decimal>,
    pub status: CountdownStatus,
}

impl CountdownLine {
    pub fn is_finished(&self) -> bool {
        !matches!(self.status, CountdownStatus::Remaining(_))
    }

    /// Countdown text, or `placeholder` when there is nothing to count.
    pub fn display<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match &self.status {
            CountdownStatus::Remaining(text) => text.as_str(),
            CountdownStatus::Ended | CountdownStatus::Invalid(_) => placeholder,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountdownSnapshot {
    pub lines: Vec<CountdownLine>,
    pub taken_at: DateTime<Utc>,
}

impl CountdownSnapshot {
    pub fn all_finished(&self) -> bool {
        self.lines.iter().all(CountdownLine::is_finished)
    }

    pub fn running(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_finished()).count()
    }
}

impl<C: Clock> CountdownMonitor<C> {
    /// Inactive auctions are dropped; unreadable end dates are logged once here.
    pub fn new(auctions: Vec<Auction>, clock: C, check_interval_ms: u64) -> Self {
        let auctions: Vec<Auction> = auctions.into_iter().filter(|a| a.active).collect();

        let now = clock.now();
        for auction in &auctions {
            if let Err(e) = auction.remaining(now) {
                log_invalid_end(&auction.id, &e);
            }
        }

        Self {
            auctions,
            clock,
            check_interval: Duration::from_millis(check_interval_ms),
        }
    }

    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    /// One tick: reads the clock once and never fails.
    pub fn snapshot(&self) -> CountdownSnapshot {
        let now = self.clock.now();

        let lines = self
            .auctions
            .iter()
            .map(|auction| CountdownLine {
                auction_id: auction.id.clone(),
                title: auction.title.clone(),
                current_bid: auction.current_bid,
                status: match auction.remaining(now) {
                    Ok(Some(text)) => CountdownStatus::Remaining(text),
                    Ok(None) => CountdownStatus::Ended,
                    Err(e) => CountdownStatus::Invalid(e.to_string()),
                },
            })
            .collect();

        CountdownSnapshot {
            lines,
            taken_at: now,
        }
    }

    /// Ticks until every auction has ended; returns the number of ticks.
    pub async fn start_monitoring<F, Fut>(&self, on_snapshot: F) -> u64
    where
        F: Fn(CountdownSnapshot) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        info!("🎬 Countdown monitor starting ({} auctions)...", self.auctions.len());

        let mut ticks = 0u64;
        let mut running: Vec<String> = Vec::new();

        loop {
            let snapshot = self.snapshot();
            ticks += 1;
            log_tick(snapshot.running(), snapshot.lines.len());

            for line in &snapshot.lines {
                if line.status == CountdownStatus::Ended && running.contains(&line.auction_id) {
                    log_auction_ended(&line.auction_id, &line.title);
                }
            }
            running = snapshot
                .lines
                .iter()
                .filter(|l| !l.is_finished())
                .map(|l| l.auction_id.clone())
                .collect();

            let done = snapshot.all_finished();
            on_snapshot(snapshot).await;

            if done {
                info!("🏁 All auctions closed after {} ticks", ticks);
                return ticks;
            }

            sleep(self.check_interval).await;
        }
    }
}
