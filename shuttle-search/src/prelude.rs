pub use anyhow::{Context, Result};
pub use itertools::Itertools;
pub use num_integer::Integer;
pub use num_traits::{Signed, Zero};

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use crate::error::{ScheduleError, SolveError};
pub use puzzle_runner::{parse_string, Reader, Solver};

///////////////////////////////////////////////////////////////////////////////
////
//// * stdlib
////
///////////////////////////////////////////////////////////////////////////////
pub use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
