#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod answer;
pub mod congruence;
pub mod earliest;
pub mod error;
mod prelude;
pub mod schedule;

pub use answer::{Answer, Report};
pub use congruence::{Congruence, MergeStrategy};
pub use earliest::Departure;
pub use error::{ScheduleError, SolveError};
pub use schedule::{Notes, ScheduleEntry};
