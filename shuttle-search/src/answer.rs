use crate::{
    congruence::{self, MergeStrategy},
    earliest,
    prelude::*,
    schedule::Notes,
};
use num_bigint::BigInt;

/// Both published results for one set of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Report {
    pub first: u128,
    pub second: BigInt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Answer {
    strategy: MergeStrategy,
}

impl Answer {
    pub const fn new(strategy: MergeStrategy) -> Self {
        Self { strategy }
    }

    pub fn report(&self, notes: &Notes) -> Result<Report> {
        Ok(Report {
            first: self.solve_first(notes)?,
            second: self.solve_second(notes)?,
        })
    }
}

impl Solver for Answer {
    type Input = Notes;
    type Output1 = u128;
    type Output2 = BigInt;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        parse_string(r)?
            .parse::<Notes>()
            .with_context(|| "invalid schedule")
    }

    /// Sample: `295`
    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1> {
        let departure =
            earliest::find_earliest(input.timestamp(), input.periods())
                .ok_or(ScheduleError::NoBuses)?;

        Ok(departure.score())
    }

    /// Sample: `1068781`
    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2> {
        let congruences = input.congruences::<BigInt>()?;
        let combined = congruence::solve(&congruences, self.strategy)
            .with_context(|| {
                format!("unable to align departures using {}", self.strategy)
            })?;

        Ok(combined.complement())
    }
}
