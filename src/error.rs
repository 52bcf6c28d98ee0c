//! Error taxonomy for the normalization engine

use crate::channels::ChannelKind;
use crate::venues::Venue;

/// Custom result type for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Errors surfaced by the fallible entry points. The lenient entry points
/// recover every variant into the neutral empty result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NormalizeError {
    #[error("malformed input: {details}")]
    Malformed { details: String },

    #[error("unrecognized message shape: {details}")]
    UnrecognizedShape { details: String },

    #[error("channel {channel:?} has no rule for venue {venue}")]
    UnsupportedChannel { venue: Venue, channel: ChannelKind },
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed { details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_maps_to_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NormalizeError = err.into();
        assert!(matches!(err, NormalizeError::Malformed { .. }));
    }

    #[test]
    fn test_display_names_venue_and_channel() {
        let err = NormalizeError::UnsupportedChannel {
            venue: Venue::BinanceComMargin,
            channel: ChannelKind::Trade,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("binance.com-margin"));
        assert!(rendered.contains("Trade"));
    }
}
