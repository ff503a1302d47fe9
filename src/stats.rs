use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Power
// ---------------------------------------------------------------------------

/// Raise `base` to `exponent` using real-number semantics.
///
/// Follows `f64::powf`: a negative base with a fractional exponent yields
/// NaN rather than an error.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// The outcome of a [`PowerArgs`] computation, with the inputs echoed back
/// as named fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Powered {
    pub base: f64,
    pub exponent: f64,
    pub result: f64,
}

/// Named-argument form of [`power`].
///
/// `base` and `exponent` are required; leaving one unset makes
/// [`PowerArgs::compute`] fail with [`Error::MissingArgument`]. Because the
/// arguments are bound by name, the order the setters are called in is
/// irrelevant. `report_base` (default `true`) emits the base value on the
/// log channel before computing; it never affects the result.
///
/// ```
/// use histoverlay::stats::PowerArgs;
///
/// let p = PowerArgs::new().base(3.0).exponent(2.0).compute().unwrap();
/// assert_eq!(p.result, 9.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PowerArgs {
    base: Option<f64>,
    exponent: Option<f64>,
    report_base: bool,
}

impl Default for PowerArgs {
    fn default() -> Self {
        PowerArgs {
            base: None,
            exponent: None,
            report_base: true,
        }
    }
}

impl PowerArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }

    pub fn exponent(mut self, exponent: f64) -> Self {
        self.exponent = Some(exponent);
        self
    }

    pub fn report_base(mut self, report: bool) -> Self {
        self.report_base = report;
        self
    }

    /// Compute the power, checking that both required arguments were bound.
    pub fn compute(self) -> Result<Powered> {
        let base = self.base.ok_or(Error::MissingArgument("base"))?;
        let exponent = self.exponent.ok_or(Error::MissingArgument("exponent"))?;
        if self.report_base {
            log::info!("power: base = {base}");
        }
        Ok(Powered {
            base,
            exponent,
            result: power(base, exponent),
        })
    }
}

// ---------------------------------------------------------------------------
// Average
// ---------------------------------------------------------------------------

/// Arithmetic mean of a sequence.
///
/// The empty sequence fails with [`Error::DivisionByZero`]; this crate never
/// returns NaN for an empty input.
pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::DivisionByZero);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_power() {
        assert_eq!(power(3.0, 2.0), 9.0);
        assert_eq!(power(2.0, 3.0), 8.0);
    }

    #[test]
    fn named_binding_is_order_insensitive() {
        let a = PowerArgs::new().base(3.0).exponent(2.0).compute().unwrap();
        let b = PowerArgs::new().exponent(2.0).base(3.0).compute().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.result, 9.0);
        // Swapping the values, not the binding order, changes the result.
        let c = PowerArgs::new().base(2.0).exponent(3.0).compute().unwrap();
        assert_eq!(c.result, 8.0);
        assert_ne!(a.result, c.result);
    }

    #[test]
    fn missing_arguments_are_reported_by_name() {
        let err = PowerArgs::new().base(2.0).compute().unwrap_err();
        assert!(matches!(err, Error::MissingArgument("exponent")));
        let err = PowerArgs::new().exponent(2.0).compute().unwrap_err();
        assert!(matches!(err, Error::MissingArgument("base")));
    }

    #[test]
    fn negative_base_fractional_exponent_is_nan() {
        assert!(power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn report_base_does_not_change_the_result() {
        let loud = PowerArgs::new().base(4.0).exponent(0.5).compute().unwrap();
        let quiet = PowerArgs::new()
            .base(4.0)
            .exponent(0.5)
            .report_base(false)
            .compute()
            .unwrap();
        assert_eq!(loud, quiet);
    }

    #[test]
    fn average_of_zero_to_hundred_is_fifty() {
        let values: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        assert_eq!(average(&values).unwrap(), 50.0);
    }

    #[test]
    fn average_of_empty_sequence_fails() {
        assert!(matches!(average(&[]), Err(Error::DivisionByZero)));
    }

    #[test]
    fn average_is_idempotent() {
        let values = [1.5, 2.5, 4.0];
        assert_eq!(average(&values).unwrap(), average(&values).unwrap());
    }
}
