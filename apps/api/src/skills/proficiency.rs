//! Proficiency scales.
//!
//! The analysis display scores skills 0–10, the CV preview draws 0–100 bars. Both
//! read the same raw level values; only the projection differs.

use serde_json::Value;

pub const DEFAULT_SCORE: u8 = 5;
pub const DEFAULT_PERCENT: u8 = 50;
pub const MAX_SCORE: u8 = 10;
pub const MAX_PERCENT: u8 = 100;

/// The four proficiency labels producers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// Case-insensitive label match.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Some(ProficiencyLevel::Beginner),
            "intermediate" => Some(ProficiencyLevel::Intermediate),
            "advanced" => Some(ProficiencyLevel::Advanced),
            "expert" => Some(ProficiencyLevel::Expert),
            _ => None,
        }
    }

    /// Expert→9, Advanced→7, Intermediate→5, Beginner→3
    pub fn score(self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 3,
            ProficiencyLevel::Intermediate => 5,
            ProficiencyLevel::Advanced => 7,
            ProficiencyLevel::Expert => 9,
        }
    }

    /// Beginner/Intermediate/Advanced/Expert → 25/50/75/90
    pub fn percent(self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 25,
            ProficiencyLevel::Intermediate => 50,
            ProficiencyLevel::Advanced => 75,
            ProficiencyLevel::Expert => 90,
        }
    }
}

/// A numeric level as the producer wrote it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Bare number: below 11 it is a score (overshoot up to 11 clamps to 10), from 11 on
    /// it is a percent. The scale is not monotonic there: `10` reads as 100% while `11`
    /// reads as 11%.
    Plain(f64),
    /// `"80%"`, `"4/5"` or a dedicated percent field.
    Percent(f64),
}

fn reads_as_score(n: f64) -> bool {
    n < f64::from(MAX_SCORE) + 1.0
}

impl Measure {
    pub fn score(self) -> u8 {
        let score = match self {
            Measure::Plain(n) if reads_as_score(n) => n,
            Measure::Plain(n) | Measure::Percent(n) => n / 10.0,
        };
        clamp_round(score, MAX_SCORE)
    }

    pub fn percent(self) -> u8 {
        let percent = match self {
            Measure::Plain(n) if reads_as_score(n) => n * 10.0,
            Measure::Plain(n) | Measure::Percent(n) => n,
        };
        clamp_round(percent, MAX_PERCENT)
    }

    fn as_percent(self) -> Self {
        match self {
            Measure::Plain(n) => Measure::Percent(n),
            percent => percent,
        }
    }
}

/// Everything a raw level field can turn out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Measured(Measure),
    Labelled(ProficiencyLevel),
    Unknown,
}

impl Level {
    /// Reads a level field: numbers, numeric text, or a proficiency label.
    pub fn read(value: &Value) -> Self {
        if let Some(measure) = read_measure(value) {
            return Level::Measured(measure);
        }
        value
            .as_str()
            .and_then(ProficiencyLevel::parse)
            .map_or(Level::Unknown, Level::Labelled)
    }

    /// Reads a field that always holds a percent, whatever its magnitude.
    pub fn read_percent(value: &Value) -> Self {
        read_measure(value).map_or(Level::Unknown, |m| Level::Measured(m.as_percent()))
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Level::Unknown)
    }

    pub fn score(self) -> u8 {
        match self {
            Level::Measured(m) => m.score(),
            Level::Labelled(label) => label.score(),
            Level::Unknown => DEFAULT_SCORE,
        }
    }

    pub fn percent(self) -> u8 {
        match self {
            Level::Measured(m) => m.percent(),
            Level::Labelled(label) => label.percent(),
            Level::Unknown => DEFAULT_PERCENT,
        }
    }
}

fn read_measure(value: &Value) -> Option<Measure> {
    let measure = match value {
        Value::Number(n) => Measure::Plain(n.as_f64()?),
        Value::String(s) => parse_measure(s.trim())?,
        _ => return None,
    };
    match measure {
        Measure::Plain(n) | Measure::Percent(n) if n.is_finite() => Some(measure),
        _ => None,
    }
}

fn parse_measure(text: &str) -> Option<Measure> {
    if let Some(number) = text.strip_suffix('%') {
        return number.trim().parse().ok().map(Measure::Percent);
    }
    if let Some((numerator, denominator)) = text.split_once('/') {
        let numerator: f64 = numerator.trim().parse().ok()?;
        let denominator: f64 = denominator.trim().parse().ok()?;
        return (denominator > 0.0).then(|| Measure::Percent(numerator / denominator * 100.0));
    }
    text.parse().ok().map(Measure::Plain)
}

fn clamp_round(value: f64, max: u8) -> u8 {
    value.round().clamp(0.0, f64::from(max)) as u8
}
