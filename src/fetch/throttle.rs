// src/fetch/throttle.rs
// =============================================================================
// This module implements the politeness delay between page fetches.
//
// The directory site is slow to forgive aggressive clients, so we wait a
// random number of seconds (35-45 by default) after every single page we
// download. Randomizing the delay makes the request pattern look less
// mechanical than a fixed interval would.
//
// Rust concepts:
// - Ranges: min..=max is an inclusive range (includes both ends)
// - rand: The de-facto crate for random number generation
// - async sleep: tokio::time::sleep waits without blocking the thread
// =============================================================================

use anyhow::{anyhow, Result};
use rand::Rng;
use std::time::Duration;

// A randomized delay applied between page fetches
//
// Both bounds are in whole seconds. min == max gives a fixed delay,
// and min == max == 0 disables waiting entirely (handy in tests).
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    min_secs: u64,
    max_secs: u64,
}

impl Throttle {
    // Creates a throttle with an inclusive delay range in seconds
    //
    // Returns an error if min > max, because rand's gen_range would
    // panic on an empty range and this comes straight from user flags.
    pub fn new(min_secs: u64, max_secs: u64) -> Result<Self> {
        if min_secs > max_secs {
            return Err(anyhow!(
                "delay range is empty: --delay-min {} is greater than --delay-max {}",
                min_secs,
                max_secs
            ));
        }
        Ok(Self { min_secs, max_secs })
    }

    // Picks the next delay duration from the range
    //
    // Split out from wait() so the range logic is testable without
    // actually sleeping.
    pub fn pick_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }

    // Sleeps for a randomly chosen delay from the range
    //
    // Announces the wait on stdout so a long-running crawl doesn't look
    // frozen while it sits between requests.
    pub async fn wait(&self) {
        let delay = self.pick_delay();
        if delay.is_zero() {
            return;
        }
        println!("   💤 Waiting {}s before the next request...", delay.as_secs());
        tokio::time::sleep(delay).await;
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Result from new()?
//    - The bounds come from --delay-min/--delay-max CLI flags
//    - gen_range panics if the range is empty (min > max)
//    - Validating once at construction turns a panic into a clean error
//
// 2. What is Duration?
//    - A span of time from the standard library
//    - Duration::from_secs(40) = 40 seconds
//    - Both std::thread::sleep and tokio::time::sleep take a Duration
//
// 3. Why tokio::time::sleep and not std::thread::sleep?
//    - std sleep blocks the whole thread
//    - tokio sleep yields to the async runtime while waiting
//    - Inside async code you should always use the async version
//
// 4. What does #[derive(Clone, Copy)] give us?
//    - Throttle is two integers, so copying it is trivially cheap
//    - Copy lets us pass it around by value without ownership ceremony
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        let result = Throttle::new(45, 35);
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_equal_bounds() {
        let throttle = Throttle::new(40, 40).unwrap();
        assert_eq!(throttle.pick_delay(), Duration::from_secs(40));
    }

    #[test]
    fn test_delay_stays_in_range() {
        let throttle = Throttle::new(35, 45).unwrap();
        for _ in 0..100 {
            let delay = throttle.pick_delay().as_secs();
            assert!((35..=45).contains(&delay));
        }
    }

    #[test]
    fn test_zero_range_means_no_delay() {
        let throttle = Throttle::new(0, 0).unwrap();
        assert!(throttle.pick_delay().is_zero());
    }
}
