//! Escalated, discounted present value of a loss stream.

use crate::error::EngineError;

/// Financial parameters of the present-value projection.
///
/// Parameters rather than constants so callers can run sensitivity
/// analyses; the defaults match the calibrated assessment (2 % climate
/// escalation, 10 % discount, 30-year horizon).
#[derive(Debug, Clone)]
pub struct ValuationParams {
    escalation_rate: f64,
    discount_rate: f64,
    horizon_years: u32,
}

impl Default for ValuationParams {
    fn default() -> Self {
        Self {
            escalation_rate: 0.02,
            discount_rate: 0.10,
            horizon_years: 30,
        }
    }
}

impl ValuationParams {
    /// Set the annual loss escalation rate (e.g. 0.02 for 2 %).
    pub fn with_escalation_rate(mut self, rate: f64) -> Self {
        self.escalation_rate = rate;
        self
    }

    /// Set the annual discount rate (e.g. 0.10 for 10 %).
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Set the projection horizon in years.
    pub fn with_horizon_years(mut self, years: u32) -> Self {
        self.horizon_years = years;
        self
    }

    /// Returns the escalation rate.
    pub fn escalation_rate(&self) -> f64 {
        self.escalation_rate
    }

    /// Returns the discount rate.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Returns the horizon in years.
    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Validate that the parameters define a usable projection.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidValuation`] when a rate is non-finite
    /// or at/below −100 %, or the horizon is zero.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.escalation_rate.is_finite() || self.escalation_rate <= -1.0 {
            return Err(EngineError::InvalidValuation {
                reason: format!("escalation rate {} must be finite and > -1", self.escalation_rate),
            });
        }
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(EngineError::InvalidValuation {
                reason: format!("discount rate {} must be finite and > -1", self.discount_rate),
            });
        }
        if self.horizon_years == 0 {
            return Err(EngineError::InvalidValuation {
                reason: "horizon must be at least 1 year".to_string(),
            });
        }
        Ok(())
    }
}

/// Present value of `annual_loss` escalated and discounted over the
/// horizon.
///
/// Year `y` (1-based) contributes
/// `annual_loss * (1 + escalation)^y / (1 + discount)^y`.
pub fn present_value(annual_loss: f64, params: &ValuationParams) -> f64 {
    let mut total = 0.0;
    for year in 1..=params.horizon_years {
        let escalated = annual_loss * (1.0 + params.escalation_rate).powi(year as i32);
        total += escalated / (1.0 + params.discount_rate).powi(year as i32);
    }
    total
}
