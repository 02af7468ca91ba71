use crate::common::{ScannerError, validate_positive};
use tracing::debug;

mod opportunity;
mod rates;
pub use opportunity::{Opportunity, ScanReport, TradeDirection};
pub use rates::{DirectionalRate, RateTable, ReserveSnapshot, build_rate_table, derive_rates};

/// One (sell pool, buy pool, direction) triple to evaluate.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub sell: &'a DirectionalRate,
    pub buy: &'a DirectionalRate,
    pub direction: TradeDirection,
}

impl Candidate<'_> {
    /// Net return of selling `trade_amount` on the sell pool and buying the
    /// same amount back on the buy pool.
    pub fn profit(&self, trade_amount: f64) -> f64 {
        let received = self.sell.rate(self.direction) * trade_amount;
        let used = trade_amount / self.buy.rate(self.direction.reverse());
        received - used
    }
}

/// Arbitrage scanner - compares every ordered pool pair of a [RateTable] in both directions
pub struct ArbitrageScanner;

impl ArbitrageScanner {
    /// Every ordered pool pair with distinct pools, crossed with both
    /// directions. Sell pool is the outer loop, buy pool the inner one, and
    /// `AtoB` comes before `BtoA`. Yields `2 * N * (N - 1)` candidates.
    pub fn candidates(rates: &RateTable) -> impl Iterator<Item = Candidate<'_>> {
        rates.iter().flat_map(move |sell| {
            rates
                .iter()
                .filter(move |buy| buy.pool_id != sell.pool_id)
                .flat_map(move |buy| {
                    TradeDirection::ALL
                        .into_iter()
                        .map(move |direction| Candidate {
                            sell,
                            buy,
                            direction,
                        })
                })
        })
    }

    /// Finds all pool pairs with a strictly positive profit for `trade_amount`,
    /// in discovery order. Results are not sorted by profit.
    pub fn scan(rates: &RateTable, trade_amount: f64) -> Result<Vec<Opportunity>, ScannerError> {
        Ok(Self::scan_report(rates, trade_amount)?.opportunities)
    }

    /// Same as [ArbitrageScanner::scan], also reporting how many candidates were evaluated.
    pub fn scan_report(rates: &RateTable, trade_amount: f64) -> Result<ScanReport, ScannerError> {
        validate_positive("trade_amount", trade_amount)?;

        let mut opportunities = Vec::new();
        let mut candidates_evaluated = 0;

        for candidate in Self::candidates(rates) {
            candidates_evaluated += 1;
            let profit = candidate.profit(trade_amount);
            // A table built by hand can hold rates no pool would quote.
            if profit.is_finite() && profit > 0.0 {
                let opportunity = Self::opportunity(rates, &candidate, profit);
                debug!(
                    sell = %opportunity.sell_pool,
                    buy = %opportunity.buy_pool,
                    direction = %opportunity.direction,
                    profit,
                    "arbitrage opportunity"
                );
                opportunities.push(opportunity);
            }
        }

        Ok(ScanReport {
            opportunities,
            candidates_evaluated,
        })
    }

    fn opportunity(rates: &RateTable, candidate: &Candidate<'_>, profit: f64) -> Opportunity {
        let (sold, received) = candidate.direction.legs(&rates.token_a, &rates.token_b);
        Opportunity {
            direction: candidate.direction,
            sell_pool: candidate.sell.pool_id.clone(),
            buy_pool: candidate.buy.pool_id.clone(),
            profit,
            token_sold: sold.to_string(),
            profit_token: received.to_string(),
            narrative: format!(
                "Sell {} -> {} on {} and buy {} -> {} on {}",
                sold, received, candidate.sell.pool_id, received, sold, candidate.buy.pool_id
            ),
        }
    }
}
