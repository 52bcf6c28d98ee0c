//! Futures venue family field mappings
//!
//! The futures channels mirror the spot rules field-for-field; only the
//! aggregate-trade wire shape differs (it carries no `M` field, so the
//! canonical record has no `ignore` key).

use serde_json::{Map, Value};

use crate::channels::ChannelKind;
use crate::record::{value_or_false, CanonicalRecord};

use super::{spot, RuleFn};

pub(crate) fn rule(channel: ChannelKind) -> Option<RuleFn> {
    match channel {
        ChannelKind::AggTrade => Some(agg_trade),
        other => spot::rule(other),
    }
}

fn agg_trade(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = CanonicalRecord::new();
    out.insert("stream_type".to_string(), stream_type.clone());
    for (key, field) in [
        ("event_type", "e"),
        ("event_time", "E"),
        ("symbol", "s"),
        ("aggregate_trade_id", "a"),
        ("price", "p"),
        ("quantity", "q"),
        ("first_trade_id", "f"),
        ("last_trade_id", "l"),
        ("trade_time", "T"),
        ("is_market_maker", "m"),
    ] {
        out.insert(key.to_string(), value_or_false(src, field));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_futures_agg_trade_has_no_ignore_key() {
        let src = serde_json::from_value::<Map<String, Value>>(json!({
            "e": "aggTrade", "E": 1592584651517u64, "s": "BTCUSDT", "a": 315753210,
            "p": "9319.00000000", "q": "0.01864900", "f": 343675554, "l": 343675554,
            "T": 1592584651516u64, "m": true, "M": true
        }))
        .unwrap();
        let out = agg_trade(&src, &json!("btcusdt@aggTrade"));
        assert!(!out.contains_key("ignore"));
        assert_eq!(out["aggregate_trade_id"], json!(315753210));
        assert_eq!(out["is_market_maker"], json!(true));
    }
}
