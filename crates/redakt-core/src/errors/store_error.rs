/// Learned-correction-store persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read corrections file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to write corrections file {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("corrections file {path} is not valid JSON: {reason}")]
    MalformedFile { path: String, reason: String },
}
