//! Spot venue family field mappings
//!
//! Each rule renames source fields one-to-one into canonical names and
//! preserves value representations verbatim: numeric-looking text stays text,
//! booleans stay booleans, millisecond timestamps stay integers. Missing
//! fields surface as the `false` sentinel instead of failing.

use serde_json::{Map, Value};

use crate::channels::ChannelKind;
use crate::record::{value_or_false, CanonicalRecord};

use super::RuleFn;

pub(crate) fn rule(channel: ChannelKind) -> Option<RuleFn> {
    match channel {
        ChannelKind::AggTrade => Some(agg_trade),
        ChannelKind::Trade => Some(trade),
        ChannelKind::Ticker => Some(ticker),
        ChannelKind::MiniTicker => Some(mini_ticker),
        ChannelKind::BookTicker => Some(book_ticker),
        ChannelKind::Kline => Some(kline),
        ChannelKind::PartialDepth => Some(partial_depth),
        ChannelKind::DiffDepth => Some(diff_depth),
    }
}

fn put(out: &mut CanonicalRecord, key: &str, src: &Map<String, Value>, field: &str) {
    out.insert(key.to_string(), value_or_false(src, field));
}

fn with_stream_type(stream_type: &Value) -> CanonicalRecord {
    let mut out = CanonicalRecord::new();
    out.insert("stream_type".to_string(), stream_type.clone());
    out
}

fn agg_trade(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    put(&mut out, "event_type", src, "e");
    put(&mut out, "event_time", src, "E");
    put(&mut out, "symbol", src, "s");
    put(&mut out, "aggregate_trade_id", src, "a");
    put(&mut out, "price", src, "p");
    put(&mut out, "quantity", src, "q");
    put(&mut out, "first_trade_id", src, "f");
    put(&mut out, "last_trade_id", src, "l");
    put(&mut out, "trade_time", src, "T");
    put(&mut out, "is_market_maker", src, "m");
    put(&mut out, "ignore", src, "M");
    out
}

fn trade(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    put(&mut out, "event_type", src, "e");
    put(&mut out, "event_time", src, "E");
    put(&mut out, "symbol", src, "s");
    put(&mut out, "trade_id", src, "t");
    put(&mut out, "price", src, "p");
    put(&mut out, "quantity", src, "q");
    put(&mut out, "buyer_order_id", src, "b");
    put(&mut out, "seller_order_id", src, "a");
    put(&mut out, "trade_time", src, "T");
    put(&mut out, "is_market_maker", src, "m");
    put(&mut out, "ignore", src, "M");
    out
}

fn ticker(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    put(&mut out, "event_type", src, "e");
    put(&mut out, "event_time", src, "E");
    put(&mut out, "symbol", src, "s");
    put(&mut out, "price_change", src, "p");
    put(&mut out, "price_change_percent", src, "P");
    put(&mut out, "weighted_average_price", src, "w");
    put(&mut out, "trade_before_24h_window", src, "x");
    put(&mut out, "last_price", src, "c");
    put(&mut out, "last_quantity", src, "Q");
    put(&mut out, "best_bid_price", src, "b");
    put(&mut out, "best_bid_quantity", src, "B");
    put(&mut out, "best_ask_price", src, "a");
    put(&mut out, "best_ask_quantity", src, "A");
    put(&mut out, "open_price", src, "o");
    put(&mut out, "high_price", src, "h");
    put(&mut out, "low_price", src, "l");
    put(&mut out, "total_traded_base_asset_volume", src, "v");
    put(&mut out, "total_traded_quote_asset_volume", src, "q");
    put(&mut out, "statistics_open_time", src, "O");
    put(&mut out, "statistics_close_time", src, "C");
    put(&mut out, "first_trade_id", src, "F");
    put(&mut out, "last_trade_id", src, "L");
    put(&mut out, "total_nr_of_trades", src, "n");
    out
}

fn mini_ticker(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    put(&mut out, "event_type", src, "e");
    put(&mut out, "event_time", src, "E");
    put(&mut out, "symbol", src, "s");
    put(&mut out, "close_price", src, "c");
    put(&mut out, "open_price", src, "o");
    put(&mut out, "high_price", src, "h");
    put(&mut out, "low_price", src, "l");
    put(&mut out, "taker_by_base_asset_volume", src, "v");
    put(&mut out, "taker_by_quote_asset_volume", src, "q");
    out
}

// the book-ticker wire shape carries no discriminator, so the event type is
// synthesized
fn book_ticker(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    out.insert("event_type".to_string(), Value::String("bookTicker".to_string()));
    put(&mut out, "order_book_update_id", src, "u");
    put(&mut out, "symbol", src, "s");
    put(&mut out, "best_bid_price", src, "b");
    put(&mut out, "best_bid_quantity", src, "B");
    put(&mut out, "best_ask_price", src, "a");
    put(&mut out, "best_ask_quantity", src, "A");
    out
}

fn kline(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    put(&mut out, "event_type", src, "e");
    put(&mut out, "event_time", src, "E");
    put(&mut out, "symbol", src, "s");

    let body = src.get("k").and_then(Value::as_object).cloned().unwrap_or_default();
    let mut k = CanonicalRecord::new();
    put(&mut k, "kline_start_time", &body, "t");
    put(&mut k, "kline_close_time", &body, "T");
    put(&mut k, "symbol", &body, "s");
    put(&mut k, "interval", &body, "i");
    // trade ids and the closed flag are resolved against the event envelope,
    // not the kline body; the venue leaves them unset there, so consumers see
    // the false sentinel
    put(&mut k, "first_trade_id", src, "f");
    put(&mut k, "last_trade_id", src, "L");
    put(&mut k, "open_price", &body, "o");
    put(&mut k, "close_price", &body, "c");
    put(&mut k, "high_price", &body, "h");
    put(&mut k, "low_price", &body, "l");
    put(&mut k, "base_volume", &body, "v");
    put(&mut k, "number_of_trades", &body, "n");
    put(&mut k, "is_closed", src, "x");
    put(&mut k, "quote", &body, "q");
    put(&mut k, "taker_by_base_asset_volume", &body, "V");
    put(&mut k, "taker_by_quote_asset_volume", &body, "Q");
    put(&mut k, "ignore", &body, "B");

    out.insert("kline".to_string(), Value::Object(k));
    out
}

// depth5/10/20 snapshots name no symbol in the payload; it comes from the
// stream label prefix
fn partial_depth(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    out.insert("event_type".to_string(), Value::String("depth".to_string()));
    let symbol = stream_type
        .as_str()
        .and_then(|label| label.split('@').next())
        .map(|prefix| Value::String(prefix.to_uppercase()))
        .unwrap_or(Value::Bool(false));
    out.insert("symbol".to_string(), symbol);
    put(&mut out, "last_update_id", src, "lastUpdateId");
    put(&mut out, "bids", src, "bids");
    put(&mut out, "asks", src, "asks");
    out
}

fn diff_depth(src: &Map<String, Value>, stream_type: &Value) -> CanonicalRecord {
    let mut out = with_stream_type(stream_type);
    put(&mut out, "event_type", src, "e");
    put(&mut out, "event_time", src, "E");
    put(&mut out, "symbol", src, "s");
    put(&mut out, "first_update_id", src, "U");
    put(&mut out, "final_update_id", src, "u");
    put(&mut out, "bids", src, "b");
    put(&mut out, "asks", src, "a");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_become_false_sentinels() {
        let src = serde_json::from_value::<Map<String, Value>>(json!({"e": "trade", "s": "BTCUSDT"})).unwrap();
        let out = trade(&src, &json!("btcusdt@trade"));
        assert_eq!(out["symbol"], json!("BTCUSDT"));
        assert_eq!(out["trade_id"], Value::Bool(false));
        assert_eq!(out["price"], Value::Bool(false));
    }

    #[test]
    fn test_partial_depth_symbol_from_label() {
        let src = serde_json::from_value::<Map<String, Value>>(json!({
            "lastUpdateId": 160,
            "bids": [["0.0024", "10"]],
            "asks": [["0.0026", "100"]]
        }))
        .unwrap();
        let out = partial_depth(&src, &json!("bnbbtc@depth5"));
        assert_eq!(out["event_type"], json!("depth"));
        assert_eq!(out["symbol"], json!("BNBBTC"));
        assert_eq!(out["last_update_id"], json!(160));
        assert_eq!(out["bids"], json!([["0.0024", "10"]]));
    }

    #[test]
    fn test_book_ticker_synthesizes_event_type() {
        let src = serde_json::from_value::<Map<String, Value>>(json!({
            "u": 400900217,
            "s": "BNBUSDT",
            "b": "25.35190000",
            "B": "31.21000000",
            "a": "25.36520000",
            "A": "40.66000000"
        }))
        .unwrap();
        let out = book_ticker(&src, &json!("bnbusdt@bookTicker"));
        assert_eq!(out["event_type"], json!("bookTicker"));
        assert_eq!(out["order_book_update_id"], json!(400900217));
        assert_eq!(out["best_ask_quantity"], json!("40.66000000"));
    }
}
