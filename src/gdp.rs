//! Per-capita GDP using the expenditure (summation) method.
//!
//! `GDP = C + I + G + X`, divided by the population count.

use crate::diagnostics::DiagnosticSink;
use crate::error::{DsfError, Result};
use crate::middleware::{trace, TraceArgs, Traced};

/// The inputs for a single year
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NationalAccounts {
    pub consumption: f64,
    pub investment: f64,
    pub government_spending: f64,
    pub net_exports: f64,
    pub population_count: f64,
}

impl NationalAccounts {
    pub fn new(
        consumption: f64,
        investment: f64,
        government_spending: f64,
        net_exports: f64,
        population_count: f64,
    ) -> Self {
        Self {
            consumption,
            investment,
            government_spending,
            net_exports,
            population_count,
        }
    }

    /// Sum of the four expenditure terms
    pub fn gdp(&self) -> f64 {
        [
            self.consumption,
            self.investment,
            self.government_spending,
            self.net_exports,
        ]
        .iter()
        .sum()
    }
}

impl TraceArgs for NationalAccounts {
    fn positional(&self) -> Vec<String> {
        vec![
            self.consumption.to_string(),
            self.investment.to_string(),
            self.government_spending.to_string(),
            self.net_exports.to_string(),
            self.population_count.to_string(),
        ]
    }
}

fn divide_by_population(gdp: f64, population_count: f64) -> Result<f64> {
    if population_count == 0.0 {
        return Err(DsfError::division_by_zero("per-capita GDP"));
    }
    Ok(gdp / population_count)
}

/// Per-capita GDP, reporting each input and the intermediate sum to `sink`.
///
/// Fails with [`DsfError::Arithmetic`] when the population count is zero.
pub fn per_capita_gdp<S: DiagnosticSink>(accounts: NationalAccounts, sink: S) -> Result<f64> {
    sink.emit(&format!("C: {}", accounts.consumption));
    sink.emit(&format!("I: {}", accounts.investment));
    sink.emit(&format!("G: {}", accounts.government_spending));
    sink.emit(&format!("X: {}", accounts.net_exports));

    let gdp = accounts.gdp();
    sink.emit(&format!("GDP: {}", gdp));

    let per_capita = divide_by_population(gdp, accounts.population_count)?;
    sink.emit(&format!("per-capita GDP: {:.2}", per_capita));

    Ok(per_capita)
}

/// Per-capita GDP with no diagnostics
pub fn per_capita_gdp_v2(accounts: NationalAccounts) -> Result<f64> {
    divide_by_population(accounts.gdp(), accounts.population_count)
}

/// Signature of [`per_capita_gdp_v2`]
pub type PerCapitaFn = fn(NationalAccounts) -> Result<f64>;

/// [`per_capita_gdp_v2`] behind the tracing middleware
pub fn per_capita_gdp_with_debugging<S: DiagnosticSink>(sink: S) -> Traced<PerCapitaFn, S> {
    trace(per_capita_gdp_v2 as PerCapitaFn, sink)
}
