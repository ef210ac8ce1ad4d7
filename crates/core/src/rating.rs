//! Rating normalization for AI-scored answers.
//!
//! Ratings are stored as free-form text: the language model has been seen
//! returning `"4"`, `"4/5"`, `"8/10"`, a bare number, or `"N/A"`. Nothing
//! downstream may trust the stored representation; every display and every
//! aggregate goes through [`normalize`].

/// Upper bound of the normalized rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Normalize a raw rating string to the closed interval `[0, 5]`.
///
/// Rules, in order:
///
/// 1. Absent value -> `0`.
/// 2. `"X/Y"` -> numeric value before the slash, otherwise the whole
///    string is parsed as a number.
/// 3. Parse failure -> `0`.
/// 4. Values above `5` are assumed to be on a 10-point scale and are
///    rescaled (`v / 10 * 5`). A true `5` is never rescaled. Values
///    above `10` get the same treatment and are then clamped; no
///    stricter validation is applied.
/// 5. Clamp to `[0, 5]`.
pub fn normalize(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let numeric_part = match raw.split_once('/') {
        Some((before, _)) => before,
        None => raw,
    };

    let mut value: f64 = match numeric_part.trim().parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };

    if !value.is_finite() {
        return 0.0;
    }

    if value > MAX_RATING {
        value = value / 10.0 * MAX_RATING;
    }

    value.clamp(0.0, MAX_RATING)
}

/// Arithmetic mean of the normalized ratings, or `None` when there are no
/// answers to aggregate.
pub fn overall<'a, I>(raws: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for raw in raws {
        sum += normalize(raw);
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Render an overall rating to one decimal place, `"0.0"` when absent.
pub fn format_overall(overall: Option<f64>) -> String {
    format!("{:.1}", overall.unwrap_or(0.0))
}

/// Color tier for the rating bar, keyed to normalized rating thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    /// `<= 1` -- deep red.
    VeryLow,
    /// `<= 2` -- red to orange.
    Low,
    /// `<= 3` -- orange to yellow.
    Medium,
    /// `<= 4` -- yellow to green.
    Good,
    /// `> 4` -- full green.
    Excellent,
}

impl RatingTier {
    /// Tier for an already-normalized rating.
    pub fn for_rating(normalized: f64) -> Self {
        if normalized <= 1.0 {
            RatingTier::VeryLow
        } else if normalized <= 2.0 {
            RatingTier::Low
        } else if normalized <= 3.0 {
            RatingTier::Medium
        } else if normalized <= 4.0 {
            RatingTier::Good
        } else {
            RatingTier::Excellent
        }
    }
}
