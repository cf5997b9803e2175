use std::fmt::Display;

use crate::{error::ParseError, evaluate};

/// Largest absolute difference at which a computed value still matches.
pub const TOLERANCE: f64 = 1e-4;

/// An expression together with the value it must evaluate to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckCase {
    /// Source text of the expression.
    pub expression: &'static str,
    /// Expected value.
    pub expected:   f64,
}

/// The built-in cases run by [`run_checks`].
pub const CASES: &[CheckCase] = &[CheckCase { expression: "2 + 3 * 4",
                                              expected:   14.0, },
                                  CheckCase { expression: "2 * 3 + 4",
                                              expected:   10.0, },
                                  CheckCase { expression: "10 - 4 / 2",
                                              expected:   8.0, },
                                  CheckCase { expression: "(2 + 3) * 4",
                                              expected:   20.0, },
                                  CheckCase { expression: "2 + 3 * (4 - 1)",
                                              expected:   11.0, },
                                  CheckCase { expression: "10 / 2 - 3",
                                              expected:   2.0, },
                                  CheckCase { expression: "2.5 * 4 + 1.5",
                                              expected:   11.5, },
                                  CheckCase { expression: "-5 + 3 * 2",
                                              expected:   1.0, },
                                  CheckCase { expression: "(-5 + 3) * 2",
                                              expected:   -4.0, },
                                  CheckCase { expression: "2 * 3 * 4 + 1",
                                              expected:   25.0, },
                                  CheckCase { expression: "20 / 4 / 2",
                                              expected:   2.5, }];

/// The result of evaluating one [`CheckCase`].
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// The case that was evaluated.
    pub case:   CheckCase,
    /// The computed value, or the error evaluation failed with.
    pub result: Result<f64, ParseError>,
}

impl CheckOutcome {
    /// Returns `true` if evaluation succeeded within [`TOLERANCE`].
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result
            .as_ref()
            .is_ok_and(|value| (value - self.case.expected).abs() < TOLERANCE)
    }
}

impl Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let CheckCase { expression, expected } = self.case;
        match &self.result {
            Ok(value) if self.passed() => write!(f, "✓ {expression} = {value:.2}"),
            Ok(value) => write!(f, "✗ {expression} = {value:.2} (expected {expected:.2})"),
            Err(e) => write!(f, "✗ {expression}: {e} (expected {expected:.2})"),
        }
    }
}

/// Outcomes of a full run over a list of cases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// One outcome per case, in input order.
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    /// Number of cases that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of cases that were run.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` if every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Evaluates every case and collects the outcomes.
///
/// # Example
/// ```
/// use bodmas::check::{CASES, run_checks};
///
/// let report = run_checks(CASES);
/// assert_eq!(report.total(), CASES.len());
/// assert!(report.all_passed());
/// ```
#[must_use]
pub fn run_checks(cases: &[CheckCase]) -> CheckReport {
    let outcomes = cases.iter()
                        .map(|&case| CheckOutcome { case,
                                                    result: evaluate(case.expression) })
                        .collect();
    CheckReport { outcomes }
}
