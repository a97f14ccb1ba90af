use thiserror::Error;

use super::catalog::{SliderDomain, ANIME_YEAR_FLOOR, RUNTIME_DOMAIN, USER_SCORE_DOMAIN, VOTE_COUNT_DOMAIN};
use super::filter::{AnimeFilter, Bounds, FilterSelection, TmdbFilter};

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid {field} range: low {low} is greater than high {high}")]
    InvertedRange { field: &'static str, low: f64, high: f64 },

    #[error("Invalid {field}: {value} (must be between {min} and {max})")]
    OutOfDomain { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("Invalid {field}: {value} (must be a multiple of {step})")]
    OffStep { field: &'static str, value: f64, step: f64 },

    #[error("Invalid year: {0} (must be between 1940 and {1})")]
    InvalidYear(u16, u16),

    #[error("Language code cannot be empty")]
    EmptyLanguageCode,
}

/// 提交筛选条件时的校验
///
/// 映射器本身不校验区间顺序与取值范围，只在 HTTP 提交时检查
#[derive(Debug, Clone, Copy)]
pub struct FilterValidator {
    current_year: u16,
}

impl FilterValidator {
    pub fn new(current_year: u16) -> Self {
        Self { current_year }
    }

    pub fn validate(&self, selection: &FilterSelection) -> Result<(), ValidationError> {
        match selection {
            FilterSelection::Movie(filter) | FilterSelection::Tv(filter) => {
                Self::validate_tmdb(filter)
            }
            FilterSelection::Anime(filter) => self.validate_anime(filter),
        }
    }

    fn validate_tmdb(filter: &TmdbFilter) -> Result<(), ValidationError> {
        if let Some(language) = filter.original_language.as_option() {
            if language.trim().is_empty() {
                return Err(ValidationError::EmptyLanguageCode);
            }
        }

        Self::validate_slider(
            "minimum vote count",
            filter.minimum_vote_count.into(),
            &widen(VOTE_COUNT_DOMAIN),
        )?;
        Self::validate_bounds(
            "user score",
            filter.user_score,
            &USER_SCORE_DOMAIN,
        )?;
        Self::validate_bounds(
            "runtime",
            Bounds::new(filter.runtime.low.into(), filter.runtime.high.into()),
            &widen(RUNTIME_DOMAIN),
        )
    }

    fn validate_anime(&self, filter: &AnimeFilter) -> Result<(), ValidationError> {
        if let Some(&year) = filter.year.as_option() {
            if year < ANIME_YEAR_FLOOR || year > self.current_year {
                return Err(ValidationError::InvalidYear(year, self.current_year));
            }
        }

        Ok(())
    }

    pub fn validate_bounds(
        field: &'static str,
        bounds: Bounds<f64>,
        domain: &SliderDomain<f64>,
    ) -> Result<(), ValidationError> {
        Self::validate_slider(field, bounds.low, domain)?;
        Self::validate_slider(field, bounds.high, domain)?;

        if !bounds.is_ordered() {
            return Err(ValidationError::InvertedRange {
                field,
                low: bounds.low,
                high: bounds.high,
            });
        }

        Ok(())
    }

    pub fn validate_slider(
        field: &'static str,
        value: f64,
        domain: &SliderDomain<f64>,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() || value < domain.min || value > domain.max {
            return Err(ValidationError::OutOfDomain {
                field,
                value,
                min: domain.min,
                max: domain.max,
            });
        }

        // 滑块两端总能取到，即使不在步长上（例如时长上限 400）
        if value == domain.max {
            return Ok(());
        }

        let steps = (value - domain.min) / domain.step;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ValidationError::OffStep {
                field,
                value,
                step: domain.step,
            });
        }

        Ok(())
    }
}

fn widen(domain: SliderDomain<u32>) -> SliderDomain<f64> {
    SliderDomain {
        min: domain.min.into(),
        max: domain.max.into(),
        step: domain.step.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, MediaKind};

    fn validator() -> FilterValidator {
        FilterValidator::new(2026)
    }

    #[test]
    fn test_defaults_are_valid() {
        for kind in MediaKind::ALL {
            assert!(validator().validate(&FilterSelection::default_for(kind)).is_ok());
        }
    }

    #[test]
    fn test_inverted_range() {
        let filter = TmdbFilter {
            user_score: Bounds::new(8.0, 3.0),
            ..TmdbFilter::default()
        };
        let err = validator().validate(&FilterSelection::Movie(filter)).unwrap_err();
        assert!(matches!(err, ValidationError::InvertedRange { field: "user score", .. }));
    }

    #[test]
    fn test_out_of_domain_and_off_step() {
        let filter = TmdbFilter {
            runtime: Bounds::new(0, 450),
            ..TmdbFilter::default()
        };
        assert!(matches!(
            validator().validate(&FilterSelection::Tv(filter)),
            Err(ValidationError::OutOfDomain { field: "runtime", .. })
        ));

        let filter = TmdbFilter {
            minimum_vote_count: 120,
            ..TmdbFilter::default()
        };
        assert!(matches!(
            validator().validate(&FilterSelection::Movie(filter)),
            Err(ValidationError::OffStep { .. })
        ));

        let filter = TmdbFilter {
            user_score: Bounds::new(2.5, 9.5),
            runtime: Bounds::new(45, 165),
            minimum_vote_count: 450,
            ..TmdbFilter::default()
        };
        assert!(validator().validate(&FilterSelection::Movie(filter)).is_ok());
    }

    #[test]
    fn test_year_bounds() {
        let mut filter = AnimeFilter {
            year: Choice::Only(1939),
            ..AnimeFilter::default()
        };
        assert_eq!(
            validator().validate(&FilterSelection::Anime(filter.clone())),
            Err(ValidationError::InvalidYear(1939, 2026))
        );

        filter.year = Choice::Only(2027);
        assert!(validator().validate(&FilterSelection::Anime(filter.clone())).is_err());

        filter.year = Choice::Only(2026);
        assert!(validator().validate(&FilterSelection::Anime(filter)).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidYear(1939, 2026);
        assert_eq!(err.to_string(), "Invalid year: 1939 (must be between 1940 and 2026)");
    }
}
