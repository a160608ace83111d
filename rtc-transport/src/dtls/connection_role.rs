use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};
use unicase::Ascii;

/// <https://tools.ietf.org/html/rfc4145#section-4>
/// setup-attr = "a=setup:" role
/// role       = "active" / "passive" / "actpass" / "holdconn"
pub const CONNECTION_ROLE_ACTIVE_STR: &str = "active";
pub const CONNECTION_ROLE_PASSIVE_STR: &str = "passive";
pub const CONNECTION_ROLE_ACTPASS_STR: &str = "actpass";
pub const CONNECTION_ROLE_HOLDCONN_STR: &str = "holdconn";

/// ConnectionRole is the DTLS connection establishment role signaled with
/// `a=setup`. `None` means no role was signaled and has no token.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionRole {
    #[default]
    #[serde(rename = "none")]
    None,
    /// The endpoint initiates the DTLS handshake.
    #[serde(rename = "active")]
    Active,
    /// The endpoint accepts an incoming DTLS handshake.
    #[serde(rename = "passive")]
    Passive,
    /// The endpoint is willing to take either role. Offerers must use this.
    #[serde(rename = "actpass")]
    ActPass,
    /// The endpoint does not want a connection established for now.
    #[serde(rename = "holdconn")]
    HoldConn,
}

/// Both conversion directions read this table, so a new role only needs a
/// variant and a row here.
const CONNECTION_ROLES: [(ConnectionRole, &str); 4] = [
    (ConnectionRole::Active, CONNECTION_ROLE_ACTIVE_STR),
    (ConnectionRole::Passive, CONNECTION_ROLE_PASSIVE_STR),
    (ConnectionRole::ActPass, CONNECTION_ROLE_ACTPASS_STR),
    (ConnectionRole::HoldConn, CONNECTION_ROLE_HOLDCONN_STR),
];

/// Looks up a role token, ignoring ASCII case.
pub fn string_to_connection_role(role_str: &str) -> Option<ConnectionRole> {
    CONNECTION_ROLES
        .iter()
        .find(|(_, token)| Ascii::new(*token) == Ascii::new(role_str))
        .map(|(role, _)| *role)
}

/// Returns the lowercase token of `role`, or `None` for [`ConnectionRole::None`].
pub fn connection_role_to_string(role: ConnectionRole) -> Option<&'static str> {
    CONNECTION_ROLES
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, token)| *token)
}

impl fmt::Display for ConnectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", connection_role_to_string(*self).unwrap_or("none"))
    }
}

impl FromStr for ConnectionRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        string_to_connection_role(s).ok_or_else(|| Error::ErrUnknownConnectionRole(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use shared::error::RTCErrorType;

    #[test]
    fn test_connection_role_round_trip() {
        let tests = vec![
            (ConnectionRole::Active, "active"),
            (ConnectionRole::Passive, "passive"),
            (ConnectionRole::ActPass, "actpass"),
            (ConnectionRole::HoldConn, "holdconn"),
        ];

        for (role, expected_string) in tests {
            let token = connection_role_to_string(role);
            assert_eq!(token, Some(expected_string));
            assert_eq!(string_to_connection_role(expected_string), Some(role));
            assert_eq!(role.to_string(), expected_string);
        }
    }

    #[test]
    fn test_string_to_connection_role_ignores_case() {
        for s in ["ACTIVE", "active", "Active", "aCtIvE"] {
            assert_eq!(
                string_to_connection_role(s),
                Some(ConnectionRole::Active),
                "{s} failed"
            );
        }
        assert_eq!(
            string_to_connection_role("ActPass"),
            Some(ConnectionRole::ActPass)
        );
        assert_eq!(
            string_to_connection_role("HOLDCONN"),
            Some(ConnectionRole::HoldConn)
        );
    }

    #[test]
    fn test_string_to_connection_role_not_found() {
        for s in ["", "none", "act", "activepassive", " active", "active\n", "ſetup"] {
            assert_eq!(string_to_connection_role(s), None, "{s:?} failed");
        }
        // unicode case folding must not apply: U+017F folds to 's'
        assert_eq!(string_to_connection_role("paſſive"), None);
    }

    #[test]
    fn test_connection_role_none_has_no_token() {
        assert_eq!(connection_role_to_string(ConnectionRole::None), None);
        assert_eq!(ConnectionRole::default(), ConnectionRole::None);
        assert_eq!(ConnectionRole::None.to_string(), "none");
    }

    #[test]
    fn test_connection_role_from_str() -> Result<()> {
        assert_eq!("Passive".parse::<ConnectionRole>()?, ConnectionRole::Passive);

        let err = "server".parse::<ConnectionRole>().expect_err("server is not a role");
        assert_eq!(err, Error::ErrUnknownConnectionRole("server".to_owned()));
        assert_eq!(err.error_type(), RTCErrorType::SyntaxError);
        Ok(())
    }

    #[test]
    fn test_connection_role_serde() {
        let json = serde_json::to_string(&ConnectionRole::ActPass).expect("serialize");
        assert_eq!(json, "\"actpass\"");
        let role: ConnectionRole = serde_json::from_str("\"holdconn\"").expect("deserialize");
        assert_eq!(role, ConnectionRole::HoldConn);
    }
}
