use crate::records::Movie;
use serde::{Deserialize, Serialize};

/// Edge cost model used when deriving the collaboration graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Hop count only, no weight table.
    #[default]
    Unweighted,
    /// `10 - rating`: well-reviewed collaborations are cheap.
    Rating,
    /// `1 - female / cast`: female-inclusive collaborations are cheap.
    GenderRatio,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Unweighted => "unweighted",
            Metric::Rating => "rating",
            Metric::GenderRatio => "gender_ratio",
        }
    }

    pub fn is_weighted(&self) -> bool {
        !matches!(self, Metric::Unweighted)
    }

    pub fn movie_cost(&self, movie: &Movie) -> Option<f64> {
        match self {
            Metric::Unweighted => None,
            Metric::Rating => Some(rating_cost(movie)),
            Metric::GenderRatio => Some(gender_ratio_cost(movie)),
        }
    }
}

impl From<&str> for Metric {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "rating" | "chill" | "chillest" => Metric::Rating,
            "gender" | "gender_ratio" | "gender-ratio" | "women" => Metric::GenderRatio,
            _ => Metric::Unweighted,
        }
    }
}

impl From<String> for Metric {
    fn from(s: String) -> Self {
        Metric::from(s.as_str())
    }
}

pub fn rating_cost(movie: &Movie) -> f64 {
    (10.0 - movie.rating).max(0.0)
}

/// Zero-cast movies divide by one instead of zero.
pub fn gender_ratio_cost(movie: &Movie) -> f64 {
    let cast = movie.cast_size.max(1) as f64;
    (1.0 - movie.female_count as f64 / cast).max(0.0)
}

/// How repeated collaborations between the same ordered pair combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// The last movie processed overwrites earlier ones.
    #[default]
    KeepLast,
    KeepMin,
    KeepSum,
}

impl WeightPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightPolicy::KeepLast => "keep_last",
            WeightPolicy::KeepMin => "keep_min",
            WeightPolicy::KeepSum => "keep_sum",
        }
    }

    pub fn combine(&self, existing: f64, incoming: f64) -> f64 {
        match self {
            WeightPolicy::KeepLast => incoming,
            WeightPolicy::KeepMin => existing.min(incoming),
            WeightPolicy::KeepSum => existing + incoming,
        }
    }
}

impl From<&str> for WeightPolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "min" | "keep_min" | "keep-min" => WeightPolicy::KeepMin,
            "sum" | "keep_sum" | "keep-sum" => WeightPolicy::KeepSum,
            _ => WeightPolicy::KeepLast,
        }
    }
}
