/// Period Scheduler
///
/// Decides whether a commit is allowed at a given time and which canonical
/// timestamp it records. Boundaries are multiples of `period`; a commit is open
/// while the distance to the *nearest* boundary is below the commit phase
/// duration, and only once per boundary: a commit must land on a boundary
/// strictly after the last recorded one.
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Rounds `now` to the nearest multiple of `period`.
///
/// Ties (`now % period == period / 2`) go to the boundary ahead.
///
/// # Returns
/// * `(boundary, gap)` - The nearest boundary and `|now - boundary|`
pub fn nearest_boundary(now: u64, period: u64) -> (u64, u64) {
    let rem = now % period;
    if rem < period / 2 {
        (now - rem, rem)
    } else {
        (now + (period - rem), period - rem)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodScheduler {
    pub period: u32,
    pub commit_phase_duration: u32,
}

impl PeriodScheduler {
    pub fn new(period: u32, commit_phase_duration: u32) -> Result<Self> {
        require!(period > 0, ErrorCode::InvalidPeriod);
        Ok(Self {
            period,
            commit_phase_duration,
        })
    }

    /// Canonical timestamp to record for a commit at `now`.
    ///
    /// # Errors
    /// * `ErrorCode::NotInCommitPhase` - If `now` is not close enough to a boundary
    /// * `ErrorCode::AlreadyCommitted` - If `now < last_timestamp + period - commit_phase_duration`
    ///   or the nearest boundary is not past `last_timestamp`
    pub fn commit_timestamp(&self, now: u64, last_timestamp: u64) -> Result<u64> {
        let (boundary, gap) = nearest_boundary(now, self.period as u64);
        require!(
            gap < self.commit_phase_duration as u64,
            ErrorCode::NotInCommitPhase
        );

        // Signed: period may be shorter than the commit phase
        let reopens_at = last_timestamp as i128 + self.period as i128
            - self.commit_phase_duration as i128;
        require!(now as i128 >= reopens_at, ErrorCode::AlreadyCommitted);

        // Periods shorter than two commit phases reopen before the boundary moves
        require!(
            boundary > last_timestamp || last_timestamp == 0,
            ErrorCode::AlreadyCommitted
        );

        Ok(boundary)
    }

    pub fn is_commit_eligible(&self, now: u64, last_timestamp: u64) -> bool {
        self.commit_timestamp(now, last_timestamp).is_ok()
    }
}
