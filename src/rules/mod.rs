//! Transformation rule set: one pure mapping per (venue family, channel)

pub mod futures;
pub mod spot;

use serde_json::{Map, Value};

use crate::channels::ChannelKind;
use crate::record::CanonicalRecord;
use crate::venues::Venue;

/// A pure per-record mapping from source fields (plus the stream label) to
/// canonical fields
pub type RuleFn = fn(&Map<String, Value>, &Value) -> CanonicalRecord;

/// Look up the rule for a venue/channel pair. `None` means the channel is not
/// defined for that venue family and the message normalizes to the neutral
/// empty result.
pub fn lookup(venue: Venue, channel: ChannelKind) -> Option<RuleFn> {
    match venue {
        // binance.je and binance.us expose the same wire shapes as the
        // primary spot venue; only the provenance identifier differs
        Venue::BinanceCom | Venue::BinanceJe | Venue::BinanceUs => spot::rule(channel),
        Venue::BinanceComFutures => futures::rule(channel),
        // no channels defined for these families
        Venue::BinanceComMargin | Venue::BinanceComIsolatedMargin | Venue::BinanceOrg | Venue::JexCom => None,
    }
}
