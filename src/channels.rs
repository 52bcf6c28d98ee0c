//! Semantic message categories, independent of venue

use serde::{Deserialize, Serialize};

/// Channel of a market-data message, derived from the message itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    AggTrade,
    Trade,
    Ticker,
    MiniTicker,
    BookTicker,
    Kline,
    /// depth5/depth10/depth20 snapshots (no event discriminator on the wire)
    PartialDepth,
    /// depthUpdate incremental book changes
    DiffDepth,
}

impl ChannelKind {
    /// Classify from a payload's `e` discriminator field
    pub fn from_event_tag(tag: &str) -> Option<Self> {
        match tag {
            "aggTrade" => Some(ChannelKind::AggTrade),
            "trade" => Some(ChannelKind::Trade),
            "24hrTicker" => Some(ChannelKind::Ticker),
            "24hrMiniTicker" => Some(ChannelKind::MiniTicker),
            "bookTicker" => Some(ChannelKind::BookTicker),
            "kline" => Some(ChannelKind::Kline),
            "depthUpdate" => Some(ChannelKind::DiffDepth),
            _ => None,
        }
    }

    /// Classify from an envelope stream label such as `btcusdt@kline_1m` or
    /// `btcusdt@depth5@100ms`
    pub fn from_stream_label(label: &str) -> Option<Self> {
        let token = label.split('@').nth(1)?;
        if let Some(rest) = token.strip_prefix("depth") {
            return match rest {
                "5" | "10" | "20" => Some(ChannelKind::PartialDepth),
                "" => Some(ChannelKind::DiffDepth),
                _ => None,
            };
        }
        if token.starts_with("kline_") {
            return Some(ChannelKind::Kline);
        }
        match token {
            "aggTrade" => Some(ChannelKind::AggTrade),
            "trade" => Some(ChannelKind::Trade),
            "ticker" => Some(ChannelKind::Ticker),
            "miniTicker" => Some(ChannelKind::MiniTicker),
            "bookTicker" => Some(ChannelKind::BookTicker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tag_classification() {
        assert_eq!(ChannelKind::from_event_tag("aggTrade"), Some(ChannelKind::AggTrade));
        assert_eq!(ChannelKind::from_event_tag("24hrTicker"), Some(ChannelKind::Ticker));
        assert_eq!(ChannelKind::from_event_tag("24hrMiniTicker"), Some(ChannelKind::MiniTicker));
        assert_eq!(ChannelKind::from_event_tag("depthUpdate"), Some(ChannelKind::DiffDepth));
        assert_eq!(ChannelKind::from_event_tag("outboundAccountInfo"), None);
    }

    #[test]
    fn test_stream_label_classification() {
        assert_eq!(ChannelKind::from_stream_label("btcusdt@trade"), Some(ChannelKind::Trade));
        assert_eq!(ChannelKind::from_stream_label("btcusdt@kline_1m"), Some(ChannelKind::Kline));
        assert_eq!(ChannelKind::from_stream_label("btcusdt@kline_1M"), Some(ChannelKind::Kline));
        assert_eq!(ChannelKind::from_stream_label("btcusdt@depth5"), Some(ChannelKind::PartialDepth));
        assert_eq!(ChannelKind::from_stream_label("btcusdt@depth20@100ms"), Some(ChannelKind::PartialDepth));
        assert_eq!(ChannelKind::from_stream_label("btcusdt@depth"), Some(ChannelKind::DiffDepth));
        assert_eq!(ChannelKind::from_stream_label("btcusdt@depth@100ms"), Some(ChannelKind::DiffDepth));
        assert_eq!(ChannelKind::from_stream_label("btcusdt"), None);
        assert_eq!(ChannelKind::from_stream_label("btcusdt@depth50"), None);
    }
}
