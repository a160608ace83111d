use serde::Serialize;
use shared::error::Result;

use super::credentials::{IceCredentialKind, IceCredentialLimits};
use super::{generate_pwd, generate_ufrag};

/// IceParameters holds the ICE username fragment and password of one side
/// of a session.
///
/// Either both credentials are empty, which legacy endpoints that never
/// signal ICE credentials rely on, or both have passed validation. The fields
/// are private so a half-empty value cannot be built.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IceParameters {
    ufrag: String,
    pwd: String,
    renomination: bool,
}

impl IceParameters {
    /// Validates remote credentials with the default limits.
    ///
    /// ```
    /// use rtc_transport::IceParameters;
    ///
    /// let params = IceParameters::parse("F7gI", "x9cml/YzichV2+XlhiMu8g").unwrap();
    /// assert_eq!(params.ufrag(), "F7gI");
    ///
    /// assert!(IceParameters::parse("", "").unwrap().is_empty());
    /// assert!(IceParameters::parse("", "x9cml/YzichV2+XlhiMu8g").is_err());
    /// ```
    pub fn parse(raw_ufrag: &str, raw_pwd: &str) -> Result<Self> {
        Self::parse_with_limits(raw_ufrag, raw_pwd, &IceCredentialLimits::default())
    }

    /// Validates remote credentials, stopping at the first failure. The ufrag
    /// is checked before the pwd.
    pub fn parse_with_limits(
        raw_ufrag: &str,
        raw_pwd: &str,
        limits: &IceCredentialLimits,
    ) -> Result<Self> {
        // legacy endpoints send neither credential
        if raw_ufrag.is_empty() && raw_pwd.is_empty() {
            log::debug!("no ICE credentials signaled, accepting empty parameters");
            return Ok(IceParameters::default());
        }

        let ufrag = IceCredentialKind::Ufrag.parse_with_limits(raw_ufrag, limits)?;
        let pwd = IceCredentialKind::Pwd.parse_with_limits(raw_pwd, limits)?;

        Ok(IceParameters {
            ufrag,
            pwd,
            renomination: false,
        })
    }

    /// Creates fresh random local credentials.
    pub fn generate() -> Self {
        let params = IceParameters {
            ufrag: generate_ufrag(),
            pwd: generate_pwd(),
            renomination: false,
        };
        log::debug!("generated local ICE ufrag {}", params.ufrag);
        params
    }

    pub fn with_renomination(mut self, renomination: bool) -> Self {
        self.renomination = renomination;
        self
    }

    pub fn ufrag(&self) -> &str {
        &self.ufrag
    }

    pub fn pwd(&self) -> &str {
        &self.pwd
    }

    /// Whether the `renomination` ICE option was advertised.
    pub fn renomination(&self) -> bool {
        self.renomination
    }

    /// True for the legacy no-credentials state.
    pub fn is_empty(&self) -> bool {
        self.ufrag.is_empty() && self.pwd.is_empty()
    }
}
