#[cfg(test)]
mod transport_description_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::error::Result;

use crate::dtls::connection_role::ConnectionRole;
use crate::dtls::fingerprint::RTCDtlsFingerprint;
use crate::ice::mode::IceMode;
use crate::ice::parameters::IceParameters;

/// `a=ice-options:trickle`, the endpoint supports trickle ICE.
pub const ICE_OPTION_TRICKLE: &str = "trickle";
/// `a=ice-options:renomination`, the endpoint supports ICE renomination.
pub const ICE_OPTION_RENOMINATION: &str = "renomination";

/// TransportDescription is the negotiated description of one transport:
/// ICE credentials and options, the ICE mode, the DTLS setup role and the
/// identity fingerprint of the certificate that will be presented.
///
/// Constructing a description does not validate the credentials; call
/// [`TransportDescription::get_ice_parameters`] or
/// [`IceParameters::parse`] before trusting them. A description is treated as
/// immutable once built and is shared by cloning. Every clone owns its own
/// copy of the fingerprint.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportDescription {
    /// ICE options in signaling order. Duplicates are kept.
    pub transport_options: Vec<String>,
    pub ice_ufrag: String,
    pub ice_pwd: String,
    pub ice_mode: IceMode,
    pub connection_role: ConnectionRole,
    pub identity_fingerprint: Option<RTCDtlsFingerprint>,
    /// Extension data carried alongside the description but never interpreted.
    pub opaque_parameters: HashMap<String, String>,
}

impl TransportDescription {
    pub fn new(
        transport_options: Vec<String>,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
        ice_mode: IceMode,
        connection_role: ConnectionRole,
        identity_fingerprint: Option<&RTCDtlsFingerprint>,
    ) -> Self {
        TransportDescription {
            transport_options,
            ice_ufrag: ice_ufrag.into(),
            ice_pwd: ice_pwd.into(),
            ice_mode,
            connection_role,
            identity_fingerprint: identity_fingerprint.cloned(),
            opaque_parameters: HashMap::new(),
        }
    }

    /// A full-mode description with only credentials set.
    pub fn with_credentials(ice_ufrag: impl Into<String>, ice_pwd: impl Into<String>) -> Self {
        TransportDescription {
            ice_ufrag: ice_ufrag.into(),
            ice_pwd: ice_pwd.into(),
            ..Default::default()
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.transport_options.iter().any(|o| o == option)
    }

    pub fn add_option(&mut self, option: impl Into<String>) {
        self.transport_options.push(option.into());
    }

    /// A description is secure when it carries an identity fingerprint.
    pub fn secure(&self) -> bool {
        self.identity_fingerprint.is_some()
    }

    /// Validates the stored credentials and returns them as [`IceParameters`],
    /// with renomination set when the matching ICE option is present.
    pub fn get_ice_parameters(&self) -> Result<IceParameters> {
        Ok(IceParameters::parse(&self.ice_ufrag, &self.ice_pwd)?
            .with_renomination(self.has_option(ICE_OPTION_RENOMINATION)))
    }
}
