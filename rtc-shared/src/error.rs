use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// RTCErrorType is the coarse classification callers branch on. The finer
/// cause is carried by the [`Error`] variant and its message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCErrorType {
    /// The supplied text is malformed.
    SyntaxError,
    /// The supplied value is well formed but does not match what was expected.
    InvalidParameter,
    /// The supplied value names something this implementation does not support.
    UnsupportedParameter,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// ErrIceUfragLength indicates an ICE username fragment outside its length bounds.
    #[error("ICE ufrag must be between {min} and {max} characters long.")]
    ErrIceUfragLength { min: usize, max: usize },

    /// ErrIceUfragInvalidChar indicates an ICE username fragment containing a non ice-char.
    #[error("ICE ufrag must contain only alphanumeric characters, '+', and '/'.")]
    ErrIceUfragInvalidChar,

    /// ErrIcePwdLength indicates an ICE password outside its length bounds.
    #[error("ICE pwd must be between {min} and {max} characters long.")]
    ErrIcePwdLength { min: usize, max: usize },

    /// ErrIcePwdInvalidChar indicates an ICE password containing a non ice-char.
    #[error("ICE pwd must contain only alphanumeric characters, '+', and '/'.")]
    ErrIcePwdInvalidChar,

    /// ErrInvalidIceCredentialLimits indicates configured credential bounds that
    /// are inverted or outside the RFC 5245 bounds.
    #[error("invalid ICE {kind} length limits: [{min}, {max}]")]
    ErrInvalidIceCredentialLimits { kind: String, min: usize, max: usize },

    #[error("unknown connection role: {0}")]
    ErrUnknownConnectionRole(String),

    #[error("invalid fingerprint value: {0}")]
    ErrInvalidFingerprintValue(String),

    #[error("unsupported fingerprint algorithm: {0}")]
    ErrUnsupportedFingerprintAlgorithm(String),

    #[error("no matching certificate fingerprint")]
    ErrNoMatchingCertificateFingerprint,
}

impl Error {
    /// Returns the classification of this error.
    pub fn error_type(&self) -> RTCErrorType {
        match self {
            Error::ErrIceUfragLength { .. }
            | Error::ErrIceUfragInvalidChar
            | Error::ErrIcePwdLength { .. }
            | Error::ErrIcePwdInvalidChar
            | Error::ErrUnknownConnectionRole(_)
            | Error::ErrInvalidFingerprintValue(_) => RTCErrorType::SyntaxError,
            Error::ErrUnsupportedFingerprintAlgorithm(_) => RTCErrorType::UnsupportedParameter,
            Error::ErrInvalidIceCredentialLimits { .. }
            | Error::ErrNoMatchingCertificateFingerprint => RTCErrorType::InvalidParameter,
        }
    }
}
