//! Dispatch registry — per-tier pricing routines selected by code
//!
//! The registry is fixed at construction: codes 1–3 print their diagnostic
//! line in [`LineStyle::Comma`], codes 4–5 in [`LineStyle::Arrow`]. Codes
//! outside the registry resolve to the LV1 routine.

use crate::catalog::{Tier, TierCode};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::Write;

/// Punctuation of the diagnostic line a routine emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// `member level:<code>, discount:<discount>`
    Comma,
    /// `member level:<code> ==> discount:<discount>`
    Arrow,
}

impl LineStyle {
    pub fn render(self, tier: Tier) -> String {
        match self {
            LineStyle::Comma => {
                format!("member level:{}, discount:{}", tier.code(), tier.discount())
            }
            LineStyle::Arrow => {
                format!("member level:{} ==> discount:{}", tier.code(), tier.discount())
            }
        }
    }
}

/// A routine bound to one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchRoutine {
    pub tier: Tier,
    pub style: LineStyle,
}

impl DispatchRoutine {
    pub fn new(tier: Tier, style: LineStyle) -> Self {
        Self { tier, style }
    }

    /// Emit one diagnostic line to `out` and return the tier's discount.
    ///
    /// `price` is accepted but not used: the routine yields the multiplier,
    /// not the discounted price.
    pub fn apply(&self, price: Decimal, out: &mut dyn Write) -> Decimal {
        let line = self.style.render(self.tier);
        if let Err(e) = writeln!(out, "{}", line) {
            tracing::warn!(tier = %self.tier, error = %e, "failed to write dispatch line");
        }
        tracing::debug!(tier = %self.tier, %price, "dispatched");
        self.tier.discount()
    }
}

/// Immutable map from tier code to routine
#[derive(Debug, Clone)]
pub struct Registry {
    routines: HashMap<TierCode, DispatchRoutine>,
    fallback: DispatchRoutine,
}

impl Registry {
    /// Build the fixed registry covering every catalog tier
    pub fn new() -> Self {
        let routines = Tier::iter()
            .map(|tier| {
                let style = match tier {
                    Tier::Lv1 | Tier::Lv2 | Tier::Lv3 => LineStyle::Comma,
                    Tier::Lv4 | Tier::Lv5 => LineStyle::Arrow,
                };
                (tier.code(), DispatchRoutine::new(tier, style))
            })
            .collect();

        Self {
            routines,
            fallback: DispatchRoutine::new(Tier::DEFAULT, LineStyle::Comma),
        }
    }

    pub fn get(&self, code: TierCode) -> Option<&DispatchRoutine> {
        self.routines.get(&code)
    }

    /// Routine for `code`, or the LV1 routine when absent
    pub fn resolve(&self, code: TierCode) -> &DispatchRoutine {
        match self.routines.get(&code) {
            Some(routine) => routine,
            None => {
                tracing::debug!(code, "no routine registered, using fallback");
                &self.fallback
            }
        }
    }

    pub fn fallback(&self) -> &DispatchRoutine {
        &self.fallback
    }

    /// Registered codes, ascending
    pub fn codes(&self) -> Vec<TierCode> {
        let mut codes: Vec<_> = self.routines.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_by_code() {
        let registry = Registry::new();
        assert_eq!(registry.codes(), vec![1, 2, 3, 4, 5]);
        for code in 1..=3 {
            assert_eq!(registry.get(code).unwrap().style, LineStyle::Comma);
        }
        for code in 4..=5 {
            assert_eq!(registry.get(code).unwrap().style, LineStyle::Arrow);
        }
    }

    #[test]
    fn test_resolve_falls_back_to_lv1() {
        let registry = Registry::new();
        assert!(registry.get(7).is_none());
        assert_eq!(registry.resolve(7), registry.fallback());
        assert_eq!(registry.resolve(7).tier, Tier::Lv1);
        assert_eq!(registry.resolve(7).style, LineStyle::Comma);
    }

    #[test]
    fn test_render_formats() {
        assert_eq!(
            LineStyle::Comma.render(Tier::Lv2),
            "member level:2, discount:0.9"
        );
        assert_eq!(
            LineStyle::Arrow.render(Tier::Lv5),
            "member level:5 ==> discount:0.6"
        );
    }

    #[test]
    fn test_apply_ignores_price() {
        let routine = DispatchRoutine::new(Tier::Lv4, LineStyle::Arrow);
        let mut out = Vec::new();
        let result = routine.apply(Decimal::new(12345, 2), &mut out);
        assert_eq!(result, Decimal::new(7, 1));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "member level:4 ==> discount:0.7\n"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_apply_survives_broken_sink() {
        let routine = DispatchRoutine::new(Tier::Lv1, LineStyle::Comma);
        assert_eq!(routine.apply(Decimal::from(100), &mut Broken), Decimal::ONE);
    }
}
