//! Shape detection: envelope convention, batch vs single, channel inference
//!
//! Precedence when a message could match more than one channel: per-object
//! `e` discriminator, then the outer envelope label, then structural shape.

use serde_json::{Map, Value};

use crate::channels::ChannelKind;
use crate::error::{NormalizeError, NormalizeResult};

/// Payload shape after envelope handling
#[derive(Debug, Clone)]
pub enum Payload {
    Single(Map<String, Value>),
    Batch(Vec<Map<String, Value>>),
}

/// A classified message, ready for a transformation rule
#[derive(Debug, Clone)]
pub struct Detected {
    pub channel: ChannelKind,
    /// Envelope stream label, or the `false` sentinel when none exists
    pub stream_type: Value,
    pub payload: Payload,
}

/// Classify a decoded message
pub fn detect(value: Value) -> NormalizeResult<Detected> {
    match value {
        Value::Object(map) => detect_object(map),
        Value::Array(items) => detect_batch(items, None),
        other => Err(NormalizeError::UnrecognizedShape {
            details: format!("expected object or array, got {other}"),
        }),
    }
}

fn detect_object(map: Map<String, Value>) -> NormalizeResult<Detected> {
    // {stream, data} multiplexing envelope: unwrap one level
    if let (Some(stream), Some(data)) = (map.get("stream"), map.get("data")) {
        let label = stream.as_str().unwrap_or_default().to_string();
        let stream_type = stream.clone();
        return match data {
            Value::Object(inner) => {
                let channel = channel_of(inner, &label)?;
                Ok(Detected {
                    channel,
                    stream_type,
                    payload: Payload::Single(inner.clone()),
                })
            }
            Value::Array(items) => detect_batch(items.clone(), Some(stream_type)),
            other => Err(NormalizeError::UnrecognizedShape {
                details: format!("envelope data is neither object nor array: {other}"),
            }),
        };
    }

    // bare single-stream payload carrying its own discriminator; no envelope
    // tag exists, so the stream label falls back to the false sentinel
    if let Some(tag) = map.get("e").and_then(Value::as_str) {
        let channel = ChannelKind::from_event_tag(tag).ok_or_else(|| NormalizeError::UnrecognizedShape {
            details: format!("unknown event type {tag:?}"),
        })?;
        return Ok(Detected {
            channel,
            stream_type: Value::Bool(false),
            payload: Payload::Single(map),
        });
    }

    Err(NormalizeError::UnrecognizedShape {
        details: "object carries neither a stream envelope nor an event discriminator".to_string(),
    })
}

/// Channel of an envelope payload. The payload's own discriminator wins; the
/// stream label decides for shapes that carry none (partial depth, book ticker).
fn channel_of(payload: &Map<String, Value>, label: &str) -> NormalizeResult<ChannelKind> {
    payload
        .get("e")
        .and_then(Value::as_str)
        .and_then(ChannelKind::from_event_tag)
        .or_else(|| ChannelKind::from_stream_label(label))
        .ok_or_else(|| NormalizeError::UnrecognizedShape {
            details: format!("unknown stream label {label:?}"),
        })
}

fn detect_batch(items: Vec<Value>, envelope_label: Option<Value>) -> NormalizeResult<Detected> {
    let first = items
        .first()
        .and_then(Value::as_object)
        .ok_or_else(|| NormalizeError::UnrecognizedShape {
            details: "empty array or non-object array element".to_string(),
        })?;

    let (channel, label) = match first.get("e").and_then(Value::as_str) {
        Some("24hrMiniTicker") => (ChannelKind::MiniTicker, "!miniTicker@arr"),
        Some("24hrTicker") => (ChannelKind::Ticker, "!ticker@arr"),
        Some(other) => {
            return Err(NormalizeError::UnrecognizedShape {
                details: format!("unknown array event type {other:?}"),
            })
        }
        // book-ticker rows carry no discriminator; recognize them by shape
        None if is_book_ticker_row(first) => (ChannelKind::BookTicker, "!bookTicker"),
        None => {
            return Err(NormalizeError::UnrecognizedShape {
                details: "array elements carry no event discriminator".to_string(),
            })
        }
    };

    let stream_type = envelope_label.unwrap_or_else(|| Value::String(label.to_string()));
    let records = items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(NormalizeError::UnrecognizedShape {
                details: format!("non-object array element: {other}"),
            }),
        })
        .collect::<NormalizeResult<Vec<_>>>()?;

    Ok(Detected {
        channel,
        stream_type,
        payload: Payload::Batch(records),
    })
}

fn is_book_ticker_row(map: &Map<String, Value>) -> bool {
    ["u", "s", "b", "B", "a", "A"].iter().all(|key| map.contains_key(*key))
}
