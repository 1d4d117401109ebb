// lib/src/filtering/buckets.rs

//! Named numeric ranges offered by the stock and experience selectors.

use std::str::FromStr;

use super::Criterion;

/// Pharmacy stock level: low `< 50`, medium `50..200`, high `>= 200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

impl StockLevel {
    pub fn bounds(&self) -> (Option<u32>, Option<u32>) {
        match self {
            StockLevel::Low => (None, Some(50)),
            StockLevel::Medium => (Some(50), Some(200)),
            StockLevel::High => (Some(200), None),
        }
    }

    pub fn of(stock: u32) -> Self {
        match stock {
            0..=49 => StockLevel::Low,
            50..=199 => StockLevel::Medium,
            _ => StockLevel::High,
        }
    }
}

impl FromStr for StockLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(StockLevel::Low),
            "medium" => Ok(StockLevel::Medium),
            "high" => Ok(StockLevel::High),
            _ => Err(()),
        }
    }
}

/// Years of practice: junior `< 5`, senior `5..10`, expert `>= 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Junior,
    Senior,
    Expert,
}

impl ExperienceLevel {
    pub fn bounds(&self) -> (Option<u32>, Option<u32>) {
        match self {
            ExperienceLevel::Junior => (None, Some(5)),
            ExperienceLevel::Senior => (Some(5), Some(10)),
            ExperienceLevel::Expert => (Some(10), None),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(ExperienceLevel::Junior),
            "senior" => Ok(ExperienceLevel::Senior),
            "expert" => Ok(ExperienceLevel::Expert),
            _ => Err(()),
        }
    }
}

/// Range criterion for a bucket name, or [`Criterion::Never`] when the name is unknown.
pub fn bucket_criterion<B>(name: &str, bounds: fn(&B) -> (Option<u32>, Option<u32>)) -> Criterion
where
    B: FromStr,
{
    match name.parse::<B>() {
        Ok(bucket) => {
            let (min, max) = bounds(&bucket);
            Criterion::Range { min, max }
        }
        Err(_) => {
            log::warn!("unknown bucket '{}', selector will match nothing", name);
            Criterion::Never
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_is_medium_stock() {
        assert_eq!(StockLevel::of(49), StockLevel::Low);
        assert_eq!(StockLevel::of(50), StockLevel::Medium);
        assert_eq!(StockLevel::of(200), StockLevel::High);
    }

    #[test]
    fn unknown_bucket_name_never_matches() {
        assert_eq!(bucket_criterion::<StockLevel>("huge", StockLevel::bounds), Criterion::Never);
        assert_eq!(bucket_criterion::<ExperienceLevel>("Senior", ExperienceLevel::bounds), Criterion::Never);
    }

    #[test]
    fn senior_experience_is_five_to_ten() {
        assert_eq!(
            bucket_criterion::<ExperienceLevel>("senior", ExperienceLevel::bounds),
            Criterion::Range { min: Some(5), max: Some(10) }
        );
    }
}
