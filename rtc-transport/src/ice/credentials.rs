use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};
use shared::util::is_ice_char;

use super::{ICE_PWD_MAX_LENGTH, ICE_PWD_MIN_LENGTH, ICE_UFRAG_MAX_LENGTH, ICE_UFRAG_MIN_LENGTH};

/// IceCredentialKind names the two ICE credential fields. Both share the
/// `ice-char` grammar but have their own length bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IceCredentialKind {
    Ufrag,
    Pwd,
}

impl fmt::Display for IceCredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IceCredentialKind::Ufrag => write!(f, "ufrag"),
            IceCredentialKind::Pwd => write!(f, "pwd"),
        }
    }
}

/// IceCredentialLimits holds the inclusive length bounds applied to remote
/// credentials. The default is the RFC 5245 grammar; deployments may load
/// tighter bounds from their own configuration. Every pair lies within the
/// RFC bounds with `min <= max`, so an empty credential never passes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IceCredentialLimitsConfig")]
pub struct IceCredentialLimits {
    ufrag_min_length: usize,
    ufrag_max_length: usize,
    pwd_min_length: usize,
    pwd_max_length: usize,
}

/// Unchecked form of [`IceCredentialLimits`] as read from configuration.
/// Missing fields take the RFC bounds.
#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(default)]
struct IceCredentialLimitsConfig {
    ufrag_min_length: usize,
    ufrag_max_length: usize,
    pwd_min_length: usize,
    pwd_max_length: usize,
}

impl Default for IceCredentialLimitsConfig {
    fn default() -> Self {
        IceCredentialLimitsConfig {
            ufrag_min_length: ICE_UFRAG_MIN_LENGTH,
            ufrag_max_length: ICE_UFRAG_MAX_LENGTH,
            pwd_min_length: ICE_PWD_MIN_LENGTH,
            pwd_max_length: ICE_PWD_MAX_LENGTH,
        }
    }
}

impl TryFrom<IceCredentialLimitsConfig> for IceCredentialLimits {
    type Error = Error;

    fn try_from(config: IceCredentialLimitsConfig) -> Result<Self> {
        IceCredentialLimits::new(
            config.ufrag_min_length,
            config.ufrag_max_length,
            config.pwd_min_length,
            config.pwd_max_length,
        )
    }
}

impl Default for IceCredentialLimits {
    fn default() -> Self {
        IceCredentialLimits {
            ufrag_min_length: ICE_UFRAG_MIN_LENGTH,
            ufrag_max_length: ICE_UFRAG_MAX_LENGTH,
            pwd_min_length: ICE_PWD_MIN_LENGTH,
            pwd_max_length: ICE_PWD_MAX_LENGTH,
        }
    }
}

fn check_bounds(kind: IceCredentialKind, min: usize, max: usize) -> Result<()> {
    let (rfc_min, rfc_max) = match kind {
        IceCredentialKind::Ufrag => (ICE_UFRAG_MIN_LENGTH, ICE_UFRAG_MAX_LENGTH),
        IceCredentialKind::Pwd => (ICE_PWD_MIN_LENGTH, ICE_PWD_MAX_LENGTH),
    };

    if rfc_min <= min && min <= max && max <= rfc_max {
        Ok(())
    } else {
        Err(Error::ErrInvalidIceCredentialLimits {
            kind: kind.to_string(),
            min,
            max,
        })
    }
}

impl IceCredentialLimits {
    /// Creates limits, rejecting any pair that is inverted or reaches
    /// outside the RFC 5245 bounds.
    pub fn new(
        ufrag_min_length: usize,
        ufrag_max_length: usize,
        pwd_min_length: usize,
        pwd_max_length: usize,
    ) -> Result<Self> {
        check_bounds(IceCredentialKind::Ufrag, ufrag_min_length, ufrag_max_length)?;
        check_bounds(IceCredentialKind::Pwd, pwd_min_length, pwd_max_length)?;

        Ok(IceCredentialLimits {
            ufrag_min_length,
            ufrag_max_length,
            pwd_min_length,
            pwd_max_length,
        })
    }

    /// Returns the inclusive `(min, max)` length pair for `kind`.
    pub fn bounds(&self, kind: IceCredentialKind) -> (usize, usize) {
        match kind {
            IceCredentialKind::Ufrag => (self.ufrag_min_length, self.ufrag_max_length),
            IceCredentialKind::Pwd => (self.pwd_min_length, self.pwd_max_length),
        }
    }
}

impl IceCredentialKind {
    /// Validates `raw` against the default limits.
    pub fn parse(self, raw: &str) -> Result<String> {
        self.parse_with_limits(raw, &IceCredentialLimits::default())
    }

    /// Validates `raw` and returns it unchanged on success. The length is
    /// checked before the character set, so a short string with bad
    /// characters reports the length error.
    pub fn parse_with_limits(self, raw: &str, limits: &IceCredentialLimits) -> Result<String> {
        let (min, max) = limits.bounds(self);
        if !(min <= raw.len() && raw.len() <= max) {
            log::trace!(
                "rejected ICE {}: length {} outside [{}, {}]",
                self,
                raw.len(),
                min,
                max
            );
            return Err(match self {
                IceCredentialKind::Ufrag => Error::ErrIceUfragLength { min, max },
                IceCredentialKind::Pwd => Error::ErrIcePwdLength { min, max },
            });
        }

        if !raw.bytes().all(is_ice_char) {
            log::trace!("rejected ICE {}: contains a non ice-char", self);
            return Err(match self {
                IceCredentialKind::Ufrag => Error::ErrIceUfragInvalidChar,
                IceCredentialKind::Pwd => Error::ErrIcePwdInvalidChar,
            });
        }

        Ok(raw.to_owned())
    }
}

/// Validates a remote ICE username fragment.
pub fn parse_ufrag(raw_ufrag: &str) -> Result<String> {
    IceCredentialKind::Ufrag.parse(raw_ufrag)
}

/// Validates a remote ICE password.
pub fn parse_pwd(raw_pwd: &str) -> Result<String> {
    IceCredentialKind::Pwd.parse(raw_pwd)
}
