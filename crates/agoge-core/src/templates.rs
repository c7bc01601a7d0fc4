//! Fixed text catalogues for routes, analyses and feed actions.

use agoge_contracts::activity::ActivityKind;

use crate::traits::RandomSource;

/// Settlement routes an agent may quote.
pub const ROUTES: [&str; 5] = [
    "Base -> USDC -> DEX Swap -> Target Token (direct)",
    "Base -> Across Bridge -> Arbitrum -> DEX -> Target Token",
    "Base -> USDC -> 1inch Aggregator -> Best Rate -> Target Token",
    "Base -> Stargate Bridge -> Optimism -> UniswapV3 -> Target Token",
    "Base -> Native Bridge -> Ethereum -> Curve Pool -> Target Token",
];

/// Short route names substituted for `{route}` inside analysis text.
const ANALYSIS_ROUTES: [&str; 3] = ["DEX aggregator", "bridge + swap", "direct pool"];

const ANALYSIS_TEMPLATES: [&str; 5] = [
    "Strong buy signal detected. Current price is {pct}% below 7-day moving average. Liquidity pool depth supports execution without significant slippage. Recommend immediate execution via {route}.",
    "Market conditions favorable. {asset} showing bullish momentum with increasing volume. Cross-chain route optimized for minimal gas costs. Estimated savings: ${savings} vs direct swap.",
    "Analyzing on-chain data reveals accumulation pattern. Smart money inflows up {pct}% in 24h. Executing via {route} to capture best available rate across {chains} chains.",
    "Volatility index is low ({vol}), ideal for large position entry. Order book analysis shows sufficient depth. Recommend splitting into {splits} tranches for optimal execution.",
    "Real-time CoinGecko data confirms price stability. Total addressable liquidity: ${liq}M. Proposed route minimizes bridge fees while ensuring sub-60s settlement.",
];

const DISCOVERY_ACTIONS: [&str; 5] = [
    "discovered a new RWA opportunity in tokenized treasuries",
    "identified price discrepancy on USDY across 3 chains",
    "found optimal bridge route for cross-chain settlement",
    "detected accumulation pattern in PAX Gold markets",
    "flagged high-yield opportunity in tokenized real estate",
];

const PROPOSAL_ACTIONS: [&str; 5] = [
    "submitted fulfillment proposal for $1,250 treasury intent",
    "proposed cross-chain execution via Across Protocol",
    "offered competitive rate for USDC to tokenized gold swap",
    "submitted optimized multi-hop route for RWA purchase",
    "proposed 28-second fulfillment for Treasury Bond intent",
];

const FULFILLMENT_ACTIONS: [&str; 5] = [
    "successfully fulfilled intent #0x7a3b in 24 seconds",
    "completed cross-chain transfer to Arbitrum",
    "delivered 1,050 USDY tokens to user wallet",
    "settled tokenized gold purchase on Ethereum mainnet",
    "fulfilled real estate token purchase via DEX aggregation",
];

const ANALYSIS_ACTIONS: [&str; 5] = [
    "published market analysis: RWA sector up 12% this week",
    "updated CoinGecko price feed for treasury tokens",
    "generated risk assessment for new tokenized asset listing",
    "analyzed on-chain flows for top 10 RWA protocols",
    "submitted oracle price update for 15 RWA tokens",
];

/// The five action strings for `kind`.
pub fn actions_for(kind: ActivityKind) -> &'static [&'static str; 5] {
    match kind {
        ActivityKind::Discovery => &DISCOVERY_ACTIONS,
        ActivityKind::Proposal => &PROPOSAL_ACTIONS,
        ActivityKind::Fulfillment => &FULFILLMENT_ACTIONS,
        ActivityKind::Analysis => &ANALYSIS_ACTIONS,
    }
}

/// Pick a route uniformly.
pub fn random_route<R: RandomSource + ?Sized>(rng: &mut R) -> &'static str {
    ROUTES[rng.index(ROUTES.len())]
}

/// Render one analysis template with freshly drawn placeholder values.
///
/// Every placeholder is drawn on every call, whichever template is chosen,
/// so the number of draws per proposal is constant.
pub fn render_analysis<R: RandomSource + ?Sized>(rng: &mut R, asset: &str) -> String {
    let template = ANALYSIS_TEMPLATES[rng.index(ANALYSIS_TEMPLATES.len())];

    let pct = rng.range_inclusive(2, 15);
    let route = ANALYSIS_ROUTES[rng.index(ANALYSIS_ROUTES.len())];
    let savings = rng.range_inclusive(5, 50);
    let chains = rng.range_inclusive(2, 4);
    let vol = rng.uniform(10.0, 40.0);
    let splits = rng.range_inclusive(2, 5);
    let liq = rng.range_inclusive(5, 200);

    template
        .replace("{pct}", &pct.to_string())
        .replace("{asset}", asset)
        .replace("{route}", route)
        .replace("{savings}", &savings.to_string())
        .replace("{chains}", &chains.to_string())
        .replace("{vol}", &format!("{:.1}", vol))
        .replace("{splits}", &splits.to_string())
        .replace("{liq}", &liq.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FastRandSource;

    #[test]
    fn rendered_analysis_has_no_placeholders() {
        let mut rng = FastRandSource::seeded(5);
        for _ in 0..200 {
            let text = render_analysis(&mut rng, "Gold Token");
            assert!(!text.contains('{') && !text.contains('}'), "unsubstituted: {text}");
        }
    }

    #[test]
    fn asset_name_is_substituted() {
        let mut rng = FastRandSource::seeded(21);
        let mut saw_asset = false;
        for _ in 0..200 {
            if render_analysis(&mut rng, "Tokenized T-Bill").contains("Tokenized T-Bill showing") {
                saw_asset = true;
            }
        }
        assert!(saw_asset, "the momentum template should appear within 200 draws");
    }

    #[test]
    fn every_kind_has_five_actions() {
        for kind in ActivityKind::ALL {
            let actions = actions_for(kind);
            assert_eq!(actions.len(), 5);
            assert!(actions.iter().all(|a| !a.is_empty()));
        }
    }
}
