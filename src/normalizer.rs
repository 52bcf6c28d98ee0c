//! Dispatcher: selects the venue family, drives shape detection, runs the
//! matching transformation rule, and stamps provenance on the result

use serde_json::Value;
use tracing::debug;

use crate::channels::ChannelKind;
use crate::detect::{self, Payload};
use crate::error::{NormalizeError, NormalizeResult};
use crate::record::{stamp_provenance, CanonicalRecord, ENGINE_VERSION};
use crate::rules;
use crate::venues::Venue;

/// Stateless normalization engine
///
/// Every call is synchronous and independent of every other call; a single
/// instance may be shared across threads without coordination.
#[derive(Clone, Copy, Debug, Default)]
pub struct StreamNormalizer;

impl StreamNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Engine version string, the same constant stamped into the provenance
    /// marker
    pub fn version(&self) -> &'static str {
        ENGINE_VERSION
    }

    /// Normalize `raw` for `venue`, recovering any failure into the neutral
    /// empty result. Never panics, never errors.
    pub fn normalize(&self, venue: Venue, raw: &str) -> CanonicalRecord {
        match self.try_normalize(venue, raw) {
            Ok(record) => record,
            Err(err) => {
                debug!(venue = %venue, %err, "recovered to neutral result");
                CanonicalRecord::new()
            }
        }
    }

    /// Fallible variant of [`normalize`](Self::normalize) exposing the error
    /// taxonomy
    pub fn try_normalize(&self, venue: Venue, raw: &str) -> NormalizeResult<CanonicalRecord> {
        if raw.is_empty() {
            return Err(NormalizeError::Malformed {
                details: "empty input".to_string(),
            });
        }
        let value: Value = serde_json::from_str(raw)?;
        let detected = detect::detect(value)?;
        let rule = rules::lookup(venue, detected.channel).ok_or(NormalizeError::UnsupportedChannel {
            venue,
            channel: detected.channel,
        })?;
        debug!(venue = %venue, channel = ?detected.channel, "rule matched");

        let mut record = match detected.payload {
            Payload::Single(map) => match detected.channel {
                // ticker channels are batch-shaped even for a single record
                ChannelKind::Ticker | ChannelKind::MiniTicker => {
                    wrap_batch(&detected.stream_type, vec![rule(&map, &detected.stream_type)])
                }
                _ => rule(&map, &detected.stream_type),
            },
            Payload::Batch(items) => {
                let data = items.iter().map(|item| rule(item, &detected.stream_type)).collect();
                wrap_batch(&detected.stream_type, data)
            }
        };
        stamp_provenance(&mut record, venue);
        Ok(record)
    }

    pub fn binance_com(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceCom, raw)
    }

    pub fn binance_com_futures(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceComFutures, raw)
    }

    pub fn binance_com_margin(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceComMargin, raw)
    }

    pub fn binance_com_isolated_margin(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceComIsolatedMargin, raw)
    }

    pub fn binance_je(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceJe, raw)
    }

    pub fn binance_us(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceUs, raw)
    }

    pub fn binance_org(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::BinanceOrg, raw)
    }

    pub fn jex_com(&self, raw: &str) -> CanonicalRecord {
        self.normalize(Venue::JexCom, raw)
    }
}

/// Outer envelope for batch-shaped channels: `stream_type`, the shared
/// `event_type`, and the ordered `data` sequence. Provenance lands on this
/// outer record only.
fn wrap_batch(stream_type: &Value, data: Vec<CanonicalRecord>) -> CanonicalRecord {
    let mut out = CanonicalRecord::new();
    out.insert("stream_type".to_string(), stream_type.clone());
    let event_type = data
        .first()
        .and_then(|record| record.get("event_type"))
        .cloned()
        .unwrap_or(Value::Bool(false));
    out.insert("event_type".to_string(), event_type);
    out.insert("data".to_string(), Value::Array(data.into_iter().map(Value::Object).collect()));
    out
}
