// src/catalog/mod.rs

use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use log::info;
use rust_decimal_macros::dec;
use std::path::Path;

use crate::domain::Auction;

/// Static auction listings, read from disk or built in memory.
#[derive(Debug, Clone, Default)]
pub struct AuctionCatalog {
    auctions: Vec<Auction>,
}

impl AuctionCatalog {
    pub fn new(auctions: Vec<Auction>) -> Self {
        Self { auctions }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        let auctions: Vec<Auction> = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse {}: {}", path.display(), e))?;

        info!("📦 Loaded {} auctions from {}", auctions.len(), path.display());
        Ok(Self { auctions })
    }

    pub fn load_or_sample(path: &Path, now: DateTime<Utc>) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("📦 {} not found, using sample auctions", path.display());
            Ok(Self::sample(now))
        }
    }

    /// Mock listings with end instants placed around `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let iso = |offset: Duration| (now + offset).to_rfc3339_opts(SecondsFormat::Secs, true);

        Self::new(vec![
            Auction {
                id: "lot-1001".to_string(),
                title: "سجادة فارسية يدوية".to_string(),
                end_date_iso: Some(iso(Duration::days(2) + Duration::hours(6))),
                current_bid: Some(dec!(4200)),
                active: true,
            },
            Auction {
                id: "lot-1002".to_string(),
                title: "ساعة جيب فضية".to_string(),
                end_date_iso: Some(iso(Duration::hours(3) + Duration::minutes(15))),
                current_bid: Some(dec!(850.50)),
                active: true,
            },
            Auction {
                id: "lot-1003".to_string(),
                title: "مخطوطة قديمة".to_string(),
                end_date_iso: Some(iso(Duration::minutes(4) + Duration::seconds(30))),
                current_bid: None,
                active: true,
            },
            Auction {
                id: "lot-1004".to_string(),
                title: "طقم قهوة نحاسي".to_string(),
                end_date_iso: Some(iso(-Duration::hours(1))),
                current_bid: Some(dec!(310)),
                active: true,
            },
            Auction {
                id: "lot-1005".to_string(),
                title: "لوحة زيتية".to_string(),
                end_date_iso: None,
                current_bid: None,
                active: true,
            },
        ])
    }

    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    pub fn active(&self) -> impl Iterator<Item = &Auction> {
        self.auctions.iter().filter(|a| a.active)
    }
}
