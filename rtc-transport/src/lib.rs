//! ICE and DTLS transport parameters for peer-to-peer connection setup.
//!
//! Signaling hands us raw strings pulled out of a session description. This
//! crate checks them before anything else in the stack trusts them, and holds
//! the result in a [`TransportDescription`]:
//!
//! - **ICE credentials** - [`IceParameters`] validates the username fragment
//!   and password against the `ice-char` grammar and the protocol length bounds.
//! - **DTLS setup role** - [`ConnectionRole`] maps the `a=setup` tokens
//!   (`active`, `passive`, `actpass`, `holdconn`) to an enum and back.
//! - **Certificate fingerprint** - [`RTCDtlsFingerprint`] identifies the peer
//!   certificate signaled out-of-band.
//!
//! # Examples
//!
//! ```
//! use rtc_transport::{
//!     ConnectionRole, IceMode, IceParameters, TransportDescription, string_to_connection_role,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ice = IceParameters::parse("F7gI", "x9cml/YzichV2+XlhiMu8g")?;
//! let role = string_to_connection_role("actpass").unwrap_or(ConnectionRole::None);
//!
//! let description = TransportDescription::new(
//!     vec!["trickle".to_owned()],
//!     ice.ufrag(),
//!     ice.pwd(),
//!     IceMode::Full,
//!     role,
//!     None,
//! );
//! assert!(description.has_option("trickle"));
//! assert!(!description.secure());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Specifications
//!
//! - [RFC 8445] - ICE: Interactive Connectivity Establishment
//! - [RFC 8839] - SDP Offer/Answer Procedures for ICE
//! - [RFC 4145] - TCP-Based Media Transport in SDP (`a=setup`)
//! - [RFC 8122] - Connection-Oriented Media Transport over TLS in SDP
//!
//! [RFC 8445]: https://datatracker.ietf.org/doc/html/rfc8445
//! [RFC 8839]: https://datatracker.ietf.org/doc/html/rfc8839
//! [RFC 4145]: https://datatracker.ietf.org/doc/html/rfc4145
//! [RFC 8122]: https://datatracker.ietf.org/doc/html/rfc8122

#![warn(rust_2018_idioms)]

pub mod dtls;
pub mod ice;
pub mod transport_description;

pub use dtls::connection_role::{
    ConnectionRole, connection_role_to_string, string_to_connection_role,
};
pub use dtls::fingerprint::RTCDtlsFingerprint;
pub use ice::credentials::{IceCredentialKind, IceCredentialLimits, parse_pwd, parse_ufrag};
pub use ice::mode::IceMode;
pub use ice::parameters::IceParameters;
pub use transport_description::{
    ICE_OPTION_RENOMINATION, ICE_OPTION_TRICKLE, TransportDescription,
};
