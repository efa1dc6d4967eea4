use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return Duration::ZERO;
    };
    let midnight = tomorrow.and_time(NaiveTime::MIN);

    // a skipped midnight is measured on the wall clock, a repeated one at its first occurrence
    let delta = match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(next) => next.signed_duration_since(now.clone()),
        None => midnight - now.naive_local(),
    };
    delta.to_std().unwrap_or_default()
}

// Fires at most once. Dropping the handle cancels it.
#[derive(Debug)]
pub struct MidnightReset {
    handle: JoinHandle<()>,
}

impl MidnightReset {
    pub fn arm<F>(delay: Duration, callback: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(delay_ms = delay.as_millis() as u64, "midnight reset armed");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback.await;
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("midnight reset cancelled");
            self.handle.abort();
        }
    }
}

impl Drop for MidnightReset {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
