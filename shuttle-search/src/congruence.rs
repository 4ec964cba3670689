use crate::prelude::*;

/// `x ≡ remainder (mod modulus)`, with `0 <= remainder < modulus`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Congruence<T> {
    remainder: T,
    modulus: T,
}

impl<T> Congruence<T>
where
    T: Integer + Signed + Clone + Display,
{
    pub fn new(remainder: T, modulus: T) -> Result<Self, SolveError> {
        if !modulus.is_positive() {
            return Err(SolveError::NonPositiveModulus {
                modulus: modulus.to_string(),
            });
        }

        let remainder = remainder.mod_floor(&modulus);
        Ok(Self { remainder, modulus })
    }

    pub fn remainder(&self) -> &T {
        &self.remainder
    }

    pub fn modulus(&self) -> &T {
        &self.modulus
    }

    pub fn is_satisfied_by(&self, x: &T) -> bool {
        x.mod_floor(&self.modulus) == self.remainder
    }

    /// `modulus - remainder`, the offset published for a combined schedule.
    pub fn complement(&self) -> T {
        self.modulus.clone() - self.remainder.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Walk the running solution's progression until the next congruence
    /// holds.
    Search,
    /// Closed form from the Bezout coefficients of the two moduli.
    Bezout,
}

impl Default for MergeStrategy {
    fn default() -> Self {
        MergeStrategy::Search
    }
}

impl FromStr for MergeStrategy {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(MergeStrategy::Search),
            "bezout" => Ok(MergeStrategy::Bezout),
            _ => Err(SolveError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl Display for MergeStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::Search => write!(f, "search"),
            MergeStrategy::Bezout => write!(f, "bezout"),
        }
    }
}

impl MergeStrategy {
    /// Combines two congruences into one over `lcm` of their moduli, or
    /// `None` when no integer satisfies both.
    pub fn merge<T>(
        self,
        acc: &Congruence<T>,
        next: &Congruence<T>,
    ) -> Option<Congruence<T>>
    where
        T: Integer + Signed + Clone + Display,
    {
        match self {
            MergeStrategy::Search => merge_by_search(acc, next),
            MergeStrategy::Bezout => merge_by_bezout(acc, next),
        }
    }
}

fn merge_by_search<T>(
    acc: &Congruence<T>,
    next: &Congruence<T>,
) -> Option<Congruence<T>>
where
    T: Integer + Signed + Clone + Display,
{
    let modulus = acc.modulus.lcm(&next.modulus);
    let mut candidate = acc.remainder.clone();
    let mut steps = T::zero();

    // A solution, if any, lies within the first `next.modulus` steps.
    while steps < next.modulus {
        if next.is_satisfied_by(&candidate) {
            return Some(Congruence {
                remainder: candidate,
                modulus,
            });
        }
        candidate = candidate + acc.modulus.clone();
        steps = steps + T::one();
    }

    None
}

fn merge_by_bezout<T>(
    acc: &Congruence<T>,
    next: &Congruence<T>,
) -> Option<Congruence<T>>
where
    T: Integer + Signed + Clone + Display,
{
    let (a, m) = (&acc.remainder, &acc.modulus);
    let (b, n) = (&next.remainder, &next.modulus);

    // m * x + n * y = gcd
    let egcd = m.extended_gcd(n);
    let (quot, rem) = (b.clone() - a.clone()).div_rem(&egcd.gcd);
    if !rem.is_zero() {
        return None;
    }

    let period = n.clone() / egcd.gcd.clone();
    let modulus = m.clone() * period.clone();
    let step = (egcd.x * quot).mod_floor(&period);
    let remainder = (a.clone() + m.clone() * step).mod_floor(&modulus);

    Some(Congruence { remainder, modulus })
}

/// Folds `congruences` pairwise, in order, into a single congruence that
/// satisfies all of them.
pub fn solve<T>(
    congruences: &[Congruence<T>],
    strategy: MergeStrategy,
) -> Result<Congruence<T>, SolveError>
where
    T: Integer + Signed + Clone + Display,
{
    let mut remaining = congruences.iter().enumerate();
    let (_, first) = remaining.next().ok_or(SolveError::EmptySystem)?;

    remaining.try_fold(first.clone(), |acc, (index, next)| {
        strategy
            .merge(&acc, next)
            .ok_or(SolveError::Inconsistent { index })
    })
}
