// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc::Sender;
use tokio::time::{Duration, MissedTickBehavior, interval};

use crate::core::events::Event;
use crate::core::session_msg::SessionMsg;
use crate::services::clock::now_ms;
use crate::{sdebug, swarn};

pub async fn run_ticker(tx: Sender<SessionMsg>, period_ms: u64) {
    sdebug!("Ticker", "ticker started ({}ms)", period_ms);

    let mut ticks = interval(Duration::from_millis(period_ms.max(1)));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticks.tick().await;

        // If the session loop is gone, stop.
        let msg = SessionMsg::Event(Event::Tick { now_ms: now_ms() });
        if tx.send(msg).await.is_err() {
            swarn!("Ticker", "ticker stopping (receiver dropped)");
            break;
        }
    }
}
