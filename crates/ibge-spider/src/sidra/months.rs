use super::error::UnknownMonth;
use std::fmt;
use std::str::FromStr;

// Names exactly as SIDRA writes them in period labels (lowercase, with diacritics).
const NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Calendar month, as named in Portuguese by the SIDRA API.
///
/// Lookup is exact-match only; there is no abbreviation or accent folding, so `"marco"` and
/// `"mar"` are both rejected.
///
/// ```rust
/// use ibge_spider::sidra::Month;
///
/// assert_eq!(Month::from_name("março"), Some(Month::March));
/// assert_eq!(Month::from_name("marco"), None);
/// assert_eq!(Month::March.code(), "03");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|i| Self::ALL[i])
    }

    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    pub fn name(self) -> &'static str {
        NAMES[self.number() as usize - 1]
    }

    /// 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Two-digit month, `"01"` through `"12"`.
    pub fn code(self) -> String {
        format!("{:02}", self.number())
    }
}

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
