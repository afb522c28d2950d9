/// Entity-extraction subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("tagger backend '{backend}' failed: {reason}")]
    BackendFailed { backend: String, reason: String },

    #[error("tagger backend '{backend}' returned span {start}..{end} outside text of {len} chars")]
    SpanOutOfBounds {
        backend: String,
        start: usize,
        end: usize,
        len: usize,
    },
}
