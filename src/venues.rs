//! Venue families and their provenance identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One exchange or one operating mode of an exchange, each with its own rule set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    BinanceCom,
    BinanceComFutures,
    BinanceComMargin,
    BinanceComIsolatedMargin,
    BinanceJe,
    BinanceUs,
    BinanceOrg,
    JexCom,
}

impl Venue {
    /// Identifier string carried in the provenance marker
    pub fn id(&self) -> &'static str {
        match self {
            Venue::BinanceCom => "binance.com",
            Venue::BinanceComFutures => "binance.com-futures",
            Venue::BinanceComMargin => "binance.com-margin",
            Venue::BinanceComIsolatedMargin => "binance.com-isolated_margin",
            Venue::BinanceJe => "binance.je",
            Venue::BinanceUs => "binance.us",
            Venue::BinanceOrg => "binance.org",
            Venue::JexCom => "jex.com",
        }
    }

    /// Every venue entry point, in declaration order
    pub fn all() -> [Venue; 8] {
        [
            Venue::BinanceCom,
            Venue::BinanceComFutures,
            Venue::BinanceComMargin,
            Venue::BinanceComIsolatedMargin,
            Venue::BinanceJe,
            Venue::BinanceUs,
            Venue::BinanceOrg,
            Venue::JexCom,
        ]
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
