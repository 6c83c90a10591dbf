//! HTTP fetching with bounded retry
//!
//! One blocking client per scrape run; every request shares the configured
//! timeout. Failed attempts sleep a random 1-2 s before retrying, and the
//! error of the final attempt is returned once the budget is exhausted.

use logger::warn;
use rand::Rng;
use std::error::Error;
use std::thread;
use std::time::Duration;

/// Bounds (seconds) of the random sleep between retry attempts
const BACKOFF_RANGE_SECS: (f64, f64) = (1.0, 2.0);

/// Blocking HTTP fetcher with a fixed retry budget
pub struct Fetcher {
    client: reqwest::blocking::Client,
    retries: u32,
}

impl Fetcher {
    /// Create a fetcher with the given per-request timeout and retry budget
    ///
    /// A retry budget of 0 is treated as 1 (a single attempt).
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(timeout_secs: u64, retries: u32) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            retries: retries.max(1),
        })
    }

    /// Fetch a URL as text, retrying up to the budget
    ///
    /// # Errors
    /// Returns the last attempt's error after the retry budget is exhausted.
    pub fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let mut last_err: Option<Box<dyn Error>> = None;

        for attempt in 1..=self.retries {
            match self.try_fetch(url) {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!("Attempt {attempt}/{} failed for {url}: {e}", self.retries);
                    last_err = Some(e);
                    if attempt < self.retries {
                        thread::sleep(random_backoff());
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| format!("All attempts failed for {url}").into()))
    }

    fn try_fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// Random delay between retry attempts, uniform in [1.0, 2.0) seconds
fn random_backoff() -> Duration {
    let (low, high) = BACKOFF_RANGE_SECS;
    let secs = rand::thread_rng().gen_range(low..high);
    Duration::from_secs_f64(secs)
}
