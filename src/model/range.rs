use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// Lookback window token understood by the `time-range` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeToken {
    D1,
    W1,
    M1,
    M3,
    M6,
    Y1,
    Y5,
    Y10,
    All,
}

/// Every token the API accepts, in display order. The analysis view offers
/// all of these; the chart view uses [`chart_ranges`].
pub const ANALYSIS_RANGES: [RangeToken; 9] = [
    RangeToken::D1,
    RangeToken::W1,
    RangeToken::M1,
    RangeToken::M3,
    RangeToken::M6,
    RangeToken::Y1,
    RangeToken::Y5,
    RangeToken::Y10,
    RangeToken::All,
];

/// The subset the chart view exposes (no intraday, no 10Y).
pub const CHART_RANGES: [RangeToken; 7] = [
    RangeToken::W1,
    RangeToken::M1,
    RangeToken::M3,
    RangeToken::M6,
    RangeToken::Y1,
    RangeToken::Y5,
    RangeToken::All,
];

impl RangeToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeToken::D1 => "1D",
            RangeToken::W1 => "1W",
            RangeToken::M1 => "1M",
            RangeToken::M3 => "3M",
            RangeToken::M6 => "6M",
            RangeToken::Y1 => "1Y",
            RangeToken::Y5 => "5Y",
            RangeToken::Y10 => "10Y",
            RangeToken::All => "ALL",
        }
    }

    /// Step through `ranges`, wrapping at both ends. Unknown current token
    /// lands on the first entry.
    pub fn cycle(self, ranges: &[RangeToken], step: isize) -> RangeToken {
        if ranges.is_empty() {
            return self;
        }
        let len = ranges.len() as isize;
        let pos = ranges.iter().position(|r| *r == self).unwrap_or(0) as isize;
        let next = (pos + step).rem_euclid(len);
        ranges[next as usize]
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeToken {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s.trim().to_ascii_uppercase().as_str() {
            "1D" => RangeToken::D1,
            "1W" => RangeToken::W1,
            "1M" => RangeToken::M1,
            "3M" => RangeToken::M3,
            "6M" => RangeToken::M6,
            "1Y" => RangeToken::Y1,
            "5Y" => RangeToken::Y5,
            "10Y" => RangeToken::Y10,
            "ALL" => RangeToken::All,
            other => bail!("unknown range token '{}'", other),
        };
        Ok(token)
    }
}
