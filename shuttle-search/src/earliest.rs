#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Departure {
    pub wait: u64,
    pub period: u64,
}

impl Departure {
    /// `wait * period`, widened since `wait` can be as large as `period`.
    pub const fn score(&self) -> u128 {
        self.wait as u128 * self.period as u128
    }
}

/// Minutes from `timestamp` until the next departure of a bus with the given
/// `period`. A bus leaving exactly at `timestamp` counts as a full period
/// away, so the result is always in `1..=period`.
pub const fn wait_for(timestamp: u64, period: u64) -> u64 {
    period - timestamp % period
}

/// The bus with the shortest wait, earliest listed on ties.
pub fn find_earliest<I>(timestamp: u64, periods: I) -> Option<Departure>
where
    I: IntoIterator<Item = u64>,
{
    periods
        .into_iter()
        .map(|period| Departure {
            wait: wait_for(timestamp, period),
            period,
        })
        .min_by_key(|departure| departure.wait)
}
