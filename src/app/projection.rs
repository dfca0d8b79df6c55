//! Projection engine: year-by-year growth of an investment account.

use thiserror::Error;

/// Inputs for one projection run, built fresh from the form on every
/// submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("{field}: `{value}` is not a number")]
    InvalidInput { field: &'static str, value: String },
    #[error("the monthly contribution cannot be negative (got {0:.2})")]
    NegativeContribution(f64),
}

impl ProjectionError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }
}

/// Year-indexed series, each of length `years + 1` (index 0 is the starting
/// position, before any contribution or interest).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    with_interest: Vec<f64>,
    without_interest: Vec<f64>,
    interest: Vec<f64>,
}

impl ProjectionResult {
    pub fn years(&self) -> u32 {
        (self.with_interest.len() - 1) as u32
    }

    /// Compounded balance per year.
    pub fn with_interest(&self) -> &[f64] {
        &self.with_interest
    }

    /// Cumulative contributions per year, with no growth applied.
    pub fn without_interest(&self) -> &[f64] {
        &self.without_interest
    }

    /// Contributed share of the compounded balance. This is the same series
    /// as [`Self::without_interest`]: the principal at year `t` is exactly
    /// what has been paid in by year `t`.
    pub fn principal_component(&self) -> &[f64] {
        &self.without_interest
    }

    /// Earned share of the compounded balance per year.
    pub fn interest_component(&self) -> &[f64] {
        &self.interest
    }

    pub fn final_balance(&self) -> f64 {
        self.with_interest[self.with_interest.len() - 1]
    }

    pub fn total_contributed(&self) -> f64 {
        self.without_interest[self.without_interest.len() - 1]
    }

    pub fn total_interest_earned(&self) -> f64 {
        self.final_balance() - self.total_contributed()
    }
}

/// Project the account over the given horizon. Interest compounds once per
/// year, applied to the running balance after that year's contributions have
/// been added. No rounding takes place here; amounts stay full-precision
/// `f64` until the display layer formats them.
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    for (field, value) in [
        ("initial capital", input.initial_capital),
        ("monthly savings", input.monthly_contribution),
        ("interest rate", input.annual_rate_percent),
    ] {
        if !value.is_finite() {
            return Err(ProjectionError::invalid(field, value.to_string()));
        }
    }
    if input.monthly_contribution < 0.0 {
        return Err(ProjectionError::NegativeContribution(
            input.monthly_contribution,
        ));
    }

    let len = input.years as usize + 1;
    let yearly_contribution = input.monthly_contribution * 12.0;
    let growth = 1.0 + input.annual_rate_percent / 100.0;

    let mut with_interest = Vec::with_capacity(len);
    let mut without_interest = Vec::with_capacity(len);
    with_interest.push(input.initial_capital);
    without_interest.push(input.initial_capital);
    for t in 1..len {
        with_interest.push((with_interest[t - 1] + yearly_contribution) * growth);
        without_interest.push(without_interest[t - 1] + yearly_contribution);
    }

    let interest = with_interest
        .iter()
        .zip(&without_interest)
        .map(|(w, c)| w - c)
        .collect();

    Ok(ProjectionResult {
        with_interest,
        without_interest,
        interest,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn input(initial: f64, monthly: f64, years: u32, rate: f64) -> ProjectionInput {
        ProjectionInput {
            initial_capital: initial,
            monthly_contribution: monthly,
            years,
            annual_rate_percent: rate,
        }
    }

    #[test]
    fn test_series_lengths() {
        for years in [0, 1, 7, 40] {
            let result = project(&input(1_000.0, 50.0, years, 3.0)).unwrap();
            assert_eq!(result.with_interest().len(), years as usize + 1);
            assert_eq!(result.without_interest().len(), years as usize + 1);
            assert_eq!(result.interest_component().len(), years as usize + 1);
            assert_eq!(result.years(), years);
        }
    }

    #[test]
    fn test_starts_at_initial_capital() {
        let result = project(&input(2_500.0, 75.0, 12, 4.0)).unwrap();
        assert_eq!(result.with_interest()[0], 2_500.0);
        assert_eq!(result.without_interest()[0], 2_500.0);
        assert_eq!(result.interest_component()[0], 0.0);
    }

    #[test]
    fn test_interest_is_the_gap_between_both_series() {
        let result = project(&input(10_000.0, 100.0, 25, 5.0)).unwrap();
        for t in 0..=25 {
            assert_eq!(
                result.interest_component()[t],
                result.with_interest()[t] - result.without_interest()[t]
            );
        }
        assert_eq!(result.principal_component(), result.without_interest());
    }

    #[test]
    fn test_wealth_is_non_decreasing() {
        for initial in [0.0, 500.0, 10_000.0] {
            for monthly in [0.0, 50.0, 250.0] {
                for rate in [0.0, 2.5, 7.0] {
                    let result = project(&input(initial, monthly, 30, rate)).unwrap();
                    let wealth = result.with_interest();
                    for t in 1..wealth.len() {
                        assert!(
                            wealth[t] >= wealth[t - 1],
                            "dip at year {t} for {initial}/{monthly}/{rate}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_negative_contribution_is_rejected() {
        for years in [0, 5] {
            for rate in [-2.0, 0.0, 5.0] {
                let err = project(&input(1_000.0, -0.01, years, rate)).unwrap_err();
                assert!(matches!(err, ProjectionError::NegativeContribution(_)));
            }
        }
        let err = project(&input(0.0, -500.0, 10, 5.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "the monthly contribution cannot be negative (got -500.00)"
        );
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        let err = project(&input(f64::NAN, 100.0, 10, 5.0)).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { .. }));

        let err = project(&input(1_000.0, 100.0, 10, f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidInput {
                field: "interest rate",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_input_message_names_the_field() {
        let err = ProjectionError::invalid("initial capital", "12a.b");
        assert_eq!(err.to_string(), "initial capital: `12a.b` is not a number");
    }

    #[test]
    fn test_ten_year_example() {
        // 10,000 up front, 100 a month, 5% a year: contributions alone reach
        // 22,000; compounding the recurrence by hand gives 32,137.09.
        let result = project(&input(10_000.0, 100.0, 10, 5.0)).unwrap();
        assert_relative_eq!(result.without_interest()[10], 22_000.0);
        assert_relative_eq!(
            result.with_interest()[10],
            32_137.090862565938,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.total_contributed(), 22_000.0);
        assert_relative_eq!(
            result.total_interest_earned(),
            10_137.090862565938,
            max_relative = 1e-12
        );
        assert_eq!(result.final_balance(), result.with_interest()[10]);
    }

    #[test]
    fn test_zero_years_is_a_single_point() {
        let result = project(&input(10_000.0, 100.0, 0, 5.0)).unwrap();
        assert_eq!(result.with_interest(), &[10_000.0]);
        assert_eq!(result.without_interest(), &[10_000.0]);
        assert_eq!(result.total_interest_earned(), 0.0);
    }

    #[test]
    fn test_zero_rate_degenerates_to_contributions() {
        let result = project(&input(5_000.0, 200.0, 15, 0.0)).unwrap();
        for t in 0..=15 {
            assert_relative_eq!(result.with_interest()[t], result.without_interest()[t]);
            assert_relative_eq!(result.with_interest()[t], 5_000.0 + 2_400.0 * t as f64);
        }
    }

    #[test]
    fn test_idle_account_stays_flat() {
        let result = project(&input(7_777.0, 0.0, 20, 0.0)).unwrap();
        for &w in result.with_interest() {
            assert_eq!(w, 7_777.0);
        }
    }
}
