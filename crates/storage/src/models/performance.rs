use std::cmp::Ordering;

/// The metric an event was scored on, ordered so that better results sort first.
///
/// Count-based results (reps, weight) beat timed ones, and reps and weight are
/// compared against each other by magnitude. Events with no usable metric sort
/// last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Reps(i32),
    Weight(i32),
    /// Total seconds
    Time(u32),
    Unrecorded,
}

impl Performance {
    /// Classifies an event from its raw metric columns.
    ///
    /// Priority is time, then reps, then weight. An empty time string and
    /// non-positive counts are treated as not recorded, as is a time that does
    /// not parse as `minutes:seconds`.
    pub fn from_metrics(time: Option<&str>, reps: Option<i32>, weight: Option<i32>) -> Self {
        if let Some(time) = time.filter(|t| !t.trim().is_empty()) {
            return match parse_finish_time(time) {
                Some(seconds) => Self::Time(seconds),
                None => {
                    tracing::warn!("Ignoring unparseable finish time {:?}", time);
                    Self::Unrecorded
                }
            };
        }

        match (reps, weight) {
            (Some(reps), _) if reps > 0 => Self::Reps(reps),
            (_, Some(weight)) if weight > 0 => Self::Weight(weight),
            _ => Self::Unrecorded,
        }
    }

    pub fn is_recorded(&self) -> bool {
        !matches!(self, Self::Unrecorded)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reps(_) => "reps",
            Self::Weight(_) => "weight",
            Self::Time(_) => "time",
            Self::Unrecorded => "unrecorded",
        }
    }

    /// Ranking comparator: `Ordering::Less` means `self` placed ahead of `other`.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Time(a), Self::Time(b)) => a.cmp(b),
            _ if self.tier() != other.tier() => self.tier().cmp(&other.tier()),
            // higher count first
            _ => other.amount().cmp(&self.amount()),
        }
    }

    fn tier(&self) -> u8 {
        match self {
            Self::Reps(_) | Self::Weight(_) => 0,
            Self::Time(_) => 1,
            Self::Unrecorded => 2,
        }
    }

    fn amount(&self) -> i32 {
        match self {
            Self::Reps(n) | Self::Weight(n) => *n,
            _ => 0,
        }
    }
}

/// Parses `minutes:seconds` into total seconds.
///
/// ```
/// use storage::models::parse_finish_time;
///
/// assert_eq!(parse_finish_time("1:30"), Some(90));
/// assert_eq!(parse_finish_time("12:05"), Some(725));
/// assert_eq!(parse_finish_time("90"), None);
/// ```
pub fn parse_finish_time(value: &str) -> Option<u32> {
    let (minutes, seconds) = value.trim().split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;

    minutes.checked_mul(60)?.checked_add(seconds)
}
