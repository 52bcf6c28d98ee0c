//! marketfy
//!
//! Rewrites raw exchange websocket market-data messages (JSON text as pushed
//! by the streaming channels) into one canonical, venue-independent record
//! shape. Consumers of the canonical shape never need to know the origin wire
//! format: field names are identical across venues and channels for
//! semantically identical quantities, and every successful result carries a
//! `[venue, version]` provenance marker under a reserved key.
//!
//! The engine is stateless and synchronous; transports, buffering, and
//! reference-data fetching live outside this crate.
//!
//! ```
//! use marketfy::StreamNormalizer;
//!
//! let engine = StreamNormalizer::new();
//! let raw = r#"{"stream":"btcusdt@trade","data":{"e":"trade","E":1592591955766,"s":"BTCUSDT","t":343719861,"p":"9302.00000000","q":"0.00101900","b":2517144287,"a":2517144235,"T":1592591955765,"m":false,"M":true}}"#;
//! let record = engine.binance_com(raw);
//! assert_eq!(record["symbol"], "BTCUSDT");
//! assert_eq!(record["price"], "9302.00000000");
//! ```

pub mod channels;
pub mod detect;
pub mod error;
pub mod normalizer;
pub mod record;
pub mod rules;
pub mod venues;

// Re-export main types for easy access
pub use channels::ChannelKind;
pub use error::{NormalizeError, NormalizeResult};
pub use normalizer::StreamNormalizer;
pub use record::{ensure_key_with_default, is_parseable_json, CanonicalRecord, ENGINE_VERSION, PROVENANCE_KEY};
pub use venues::Venue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StreamNormalizer>();
    }

    #[test]
    fn test_reexports_cover_the_public_surface() {
        let engine = StreamNormalizer::new();
        assert_eq!(engine.version(), ENGINE_VERSION);
        assert!(engine.normalize(Venue::BinanceCom, "").is_empty());
    }
}
