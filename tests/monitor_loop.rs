use auction_countdown::domain::{Auction, Clock};
use auction_countdown::monitor::{CountdownMonitor, CountdownStatus};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// Wall clock driven by tokio's (pausable) time.
struct TokioClock {
    start: DateTime<Utc>,
    origin: tokio::time::Instant,
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.origin.elapsed()).unwrap();
        self.start + elapsed
    }
}

fn auction(id: &str, end: &str) -> Auction {
    Auction {
        id: id.to_string(),
        title: id.to_string(),
        end_date_iso: Some(end.to_string()),
        current_bid: None,
        active: true,
    }
}

#[tokio::test(start_paused = true)]
async fn stops_once_every_auction_has_ended() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 12, 59, 57).unwrap();
    let clock = TokioClock {
        start,
        origin: tokio::time::Instant::now(),
    };

    let monitor = CountdownMonitor::new(vec![auction("lot", "2026-01-01T13:00:00Z")], clock, 1000);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let ticks = monitor
        .start_monitoring(|snapshot| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(snapshot.lines[0].status.clone());
            }
        })
        .await;

    // 3s, 2s, 1s left, then ended
    assert_eq!(ticks, 4);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 4);
    for status in &seen[..3] {
        assert_eq!(status, &CountdownStatus::Remaining("أقل من دقيقة".to_string()));
    }
    assert_eq!(seen[3], CountdownStatus::Ended);
}

#[tokio::test(start_paused = true)]
async fn already_ended_catalog_ticks_once() {
    let clock = TokioClock {
        start: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
        origin: tokio::time::Instant::now(),
    };

    let monitor = CountdownMonitor::new(
        vec![auction("a", "2026-01-01T00:00:00"), auction("b", "not a date")],
        clock,
        500,
    );

    let ticks = monitor.start_monitoring(|_| async {}).await;
    assert_eq!(ticks, 1);
}
