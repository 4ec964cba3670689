use crate::{congruence::Congruence, prelude::*};

pub const MARKER: &str = "x";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScheduleEntry {
    Bus(u64),
    /// Position whose departure does not matter.
    Marker,
}

impl From<&str> for ScheduleEntry {
    /// Anything that isn't a plain integer is treated like `x`.
    fn from(token: &str) -> Self {
        match token.trim() {
            MARKER => ScheduleEntry::Marker,
            t => t.parse().map_or(ScheduleEntry::Marker, ScheduleEntry::Bus),
        }
    }
}

impl ScheduleEntry {
    pub const fn period(self) -> Option<u64> {
        match self {
            ScheduleEntry::Bus(period) => Some(period),
            ScheduleEntry::Marker => None,
        }
    }
}

/// Parsed puzzle notes: the earliest timestamp a departure is possible and
/// the ordered bus schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notes {
    timestamp: u64,
    schedule: Vec<ScheduleEntry>,
}

impl Notes {
    pub fn new(
        timestamp: u64,
        schedule: Vec<ScheduleEntry>,
    ) -> Result<Self, ScheduleError> {
        if let Some(position) = schedule
            .iter()
            .position(|&entry| entry == ScheduleEntry::Bus(0))
        {
            return Err(ScheduleError::ZeroPeriod { position });
        }
        if schedule.iter().all(|&entry| entry == ScheduleEntry::Marker) {
            return Err(ScheduleError::NoBuses);
        }

        Ok(Self {
            timestamp,
            schedule,
        })
    }

    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Bus periods in listed order, markers skipped.
    pub fn periods(&self) -> impl Iterator<Item = u64> + '_ {
        self.schedule.iter().filter_map(|entry| entry.period())
    }

    /// `(position, period)` of every bus.
    pub fn buses(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.schedule
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.period().map(|p| (i, p)))
    }

    /// One `x ≡ position (mod period)` per bus; the offset at which every
    /// bus leaves `position` minutes after it is the complement of the
    /// combined solution.
    pub fn congruences<T>(&self) -> Result<Vec<Congruence<T>>, SolveError>
    where
        T: Integer + Signed + Clone + Display + From<u64>,
    {
        self.buses()
            .map(|(position, period)| {
                Congruence::new(T::from(position as u64), T::from(period))
            })
            .collect()
    }
}

impl FromStr for Notes {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim);

        let timestamp_text = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or(ScheduleError::EmptyInput)?;
        let timestamp = timestamp_text.parse::<u64>().map_err(|_| {
            ScheduleError::InvalidTimestamp(timestamp_text.to_owned())
        })?;

        let schedule = lines
            .next()
            .ok_or(ScheduleError::MissingSchedule)?
            .split(',')
            .map(ScheduleEntry::from)
            .collect_vec();

        Notes::new(timestamp, schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::ScheduleEntry::{Bus, Marker};
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn parses_sample_notes() {
        let notes = "939\n7,13,x,x,59,x,31,19\n".parse::<Notes>().unwrap();

        assert_eq!(notes.timestamp(), 939);
        assert_eq!(
            notes.schedule(),
            &[Bus(7), Bus(13), Marker, Marker, Bus(59), Marker, Bus(31), Bus(19)]
        );
        assert_eq!(notes.periods().collect_vec(), vec![7, 13, 59, 31, 19]);
        assert_eq!(
            notes.buses().collect_vec(),
            vec![(0, 7), (1, 13), (4, 59), (6, 31), (7, 19)]
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let notes = "  939 \r\n 17 , x ,13,19\n\n".parse::<Notes>().unwrap();
        assert_eq!(notes.timestamp(), 939);
        assert_eq!(notes.schedule(), &[Bus(17), Marker, Bus(13), Bus(19)]);
    }

    #[test]
    fn unknown_tokens_are_markers() {
        assert_eq!(ScheduleEntry::from("x"), Marker);
        assert_eq!(ScheduleEntry::from("?"), Marker);
        assert_eq!(ScheduleEntry::from("-3"), Marker);
        assert_eq!(ScheduleEntry::from("41"), Bus(41));
    }

    #[test]
    fn rejects_broken_notes() {
        assert_eq!("".parse::<Notes>(), Err(ScheduleError::EmptyInput));
        assert_eq!(
            "soon\n7,13".parse::<Notes>(),
            Err(ScheduleError::InvalidTimestamp("soon".to_owned()))
        );
        assert_eq!("939".parse::<Notes>(), Err(ScheduleError::MissingSchedule));
        assert_eq!("939\nx,x".parse::<Notes>(), Err(ScheduleError::NoBuses));
        assert_eq!("939\n".parse::<Notes>(), Err(ScheduleError::MissingSchedule));
        assert_eq!(
            "939\n7,x,0".parse::<Notes>(),
            Err(ScheduleError::ZeroPeriod { position: 2 })
        );
    }

    #[test]
    fn congruences_follow_positions() {
        let notes = "0\n17,x,13,19".parse::<Notes>().unwrap();
        let congruences = notes.congruences::<BigInt>().unwrap();

        let pairs = congruences
            .iter()
            .map(|c| (c.remainder().clone(), c.modulus().clone()))
            .collect_vec();
        assert_eq!(
            pairs,
            vec![
                (BigInt::from(0), BigInt::from(17)),
                (BigInt::from(2), BigInt::from(13)),
                (BigInt::from(3), BigInt::from(19)),
            ]
        );
    }

    #[test]
    fn positions_past_the_period_wrap() {
        let notes = Notes::new(0, vec![Bus(3), Marker, Marker, Marker, Bus(2)])
            .unwrap();
        let congruences = notes.congruences::<i128>().unwrap();
        assert_eq!(*congruences[1].remainder(), 0);
    }
}
