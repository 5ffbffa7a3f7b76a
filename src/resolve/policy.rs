//! Tiered price resolution policy
//!
//! Pure decision logic: given the latest trade and the best outstanding
//! orders for a symbol, pick the canonical price and tag its provenance.
//! No I/O, deterministic, exact decimal precision preserved.

use super::{PriceFacts, PriceSource};
use rust_decimal::Decimal;

/// Price assigned when no usable market fact exists.
pub const FALLBACK_PRICE: Decimal = Decimal::ONE;

/// Resolve the canonical price for `symbol` from the given facts.
///
/// Tiers are consulted in trust order: trade, then best bid, then best ask,
/// then the fallback constant. The reference stablecoin is pegged at 1.00 by
/// definition and never consults facts, so stale or adversarial order data
/// cannot perturb it.
///
/// A zero or negative fact price is treated as absent and falls through to
/// the next tier; it is never propagated to the caller.
pub fn resolve_price(
    symbol: &str,
    stable_symbol: &str,
    facts: &PriceFacts,
) -> (Decimal, PriceSource) {
    if symbol == stable_symbol {
        return (Decimal::ONE, PriceSource::Trade);
    }

    if let Some(price) = usable(facts.last_trade) {
        return (price, PriceSource::Trade);
    }
    if let Some(price) = usable(facts.best_bid) {
        return (price, PriceSource::BuyOrder);
    }
    if let Some(price) = usable(facts.best_ask) {
        return (price, PriceSource::SellOrder);
    }

    (FALLBACK_PRICE, PriceSource::Fallback)
}

/// A fact price is usable only if strictly positive.
fn usable(price: Option<Decimal>) -> Option<Decimal> {
    price.filter(|p| p.is_sign_positive() && !p.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const STABLE: &str = "USDC";

    fn facts(
        last_trade: Option<Decimal>,
        best_bid: Option<Decimal>,
        best_ask: Option<Decimal>,
    ) -> PriceFacts {
        PriceFacts {
            last_trade,
            best_bid,
            best_ask,
        }
    }

    #[test]
    fn test_stablecoin_short_circuit() {
        // Facts must never perturb the reference asset, even adversarial ones
        let loaded = facts(Some(dec!(42)), Some(dec!(0.01)), Some(dec!(1000)));
        let (price, source) = resolve_price(STABLE, STABLE, &loaded);
        assert_eq!(price, dec!(1.00));
        assert_eq!(source, PriceSource::Trade);
    }

    #[test]
    fn test_trade_tier_wins() {
        let (price, source) = resolve_price(
            "CLB",
            STABLE,
            &facts(Some(dec!(3.20)), Some(dec!(3.10)), Some(dec!(3.30))),
        );
        assert_eq!(price, dec!(3.20));
        assert_eq!(source, PriceSource::Trade);
    }

    #[test]
    fn test_buy_order_tier() {
        let (price, source) = resolve_price(
            "CLB",
            STABLE,
            &facts(None, Some(dec!(2.50)), Some(dec!(2.80))),
        );
        assert_eq!(price, dec!(2.50));
        assert_eq!(source, PriceSource::BuyOrder);
    }

    #[test]
    fn test_sell_order_tier() {
        let (price, source) = resolve_price("CLB", STABLE, &facts(None, None, Some(dec!(2.80))));
        assert_eq!(price, dec!(2.80));
        assert_eq!(source, PriceSource::SellOrder);
    }

    #[test]
    fn test_fallback_tier() {
        let (price, source) = resolve_price("CLB", STABLE, &PriceFacts::default());
        assert_eq!(price, dec!(1.00));
        assert_eq!(source, PriceSource::Fallback);
    }

    #[test]
    fn test_negative_trade_treated_as_absent() {
        let (price, source) = resolve_price(
            "CLB",
            STABLE,
            &facts(Some(dec!(-5)), Some(dec!(2.50)), None),
        );
        assert_eq!(price, dec!(2.50));
        assert_eq!(source, PriceSource::BuyOrder);
    }

    #[test]
    fn test_zero_facts_fall_through_to_fallback() {
        let (price, source) = resolve_price(
            "CLB",
            STABLE,
            &facts(Some(dec!(0)), Some(dec!(0)), Some(dec!(0))),
        );
        assert_eq!(price, dec!(1.00));
        assert_eq!(source, PriceSource::Fallback);
    }

    #[test]
    fn test_zero_trade_falls_to_sell_order() {
        let (price, source) = resolve_price(
            "CLB",
            STABLE,
            &facts(Some(dec!(0)), None, Some(dec!(0.07))),
        );
        assert_eq!(price, dec!(0.07));
        assert_eq!(source, PriceSource::SellOrder);
    }

    #[test]
    fn test_precision_preserved() {
        // No rounding; the exact decimal flows through
        let (price, _) = resolve_price(
            "CLB",
            STABLE,
            &facts(Some(dec!(0.123456789012345678)), None, None),
        );
        assert_eq!(price, dec!(0.123456789012345678));
    }
}
