use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};
use shared::error::{Error, Result};
use subtle::ConstantTimeEq;

/// DTLS certificate fingerprint for authentication.
///
/// `RTCDtlsFingerprint` contains a cryptographic hash of a certificate that is
/// used to verify the identity of the remote peer during the DTLS handshake.
/// The fingerprint is exchanged in the SDP and must match the actual certificate
/// presented during the DTLS handshake.
///
/// # Common Hash Algorithms
///
/// - `sha-256` - Most commonly used, recommended
/// - `sha-384` - Higher security
/// - `sha-512` - Maximum security
///
/// # Format
///
/// The fingerprint value is a colon-separated sequence of hexadecimal bytes,
/// for example: `"AB:CD:EF:01:23:45:67:89:..."`
///
/// # Examples
///
/// ```
/// use rtc_transport::RTCDtlsFingerprint;
///
/// let fingerprint = RTCDtlsFingerprint {
///     algorithm: "sha-256".to_string(),
///     value: "AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89".to_string(),
/// };
///
/// assert_eq!(fingerprint.digest().unwrap().len(), 32);
/// println!("a=fingerprint:{fingerprint}");
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RTCDtlsFingerprint {
    /// Hash function algorithm name from the 'Hash function Textual Names'
    /// registry, such as `"sha-256"`. Case-insensitive, typically lowercase.
    pub algorithm: String,

    /// Certificate fingerprint value, two hex digits per byte separated by
    /// colons, using the syntax specified in [RFC 4572 Section 5].
    ///
    /// [RFC 4572 Section 5]: https://datatracker.ietf.org/doc/html/rfc4572#section-5
    pub value: String,
}

fn hash_certificate(algorithm: &str, der: &[u8]) -> Result<Vec<u8>> {
    match algorithm.to_ascii_lowercase().as_str() {
        "sha-256" => Ok(Sha256::digest(der).to_vec()),
        "sha-384" => Ok(Sha384::digest(der).to_vec()),
        "sha-512" => Ok(Sha512::digest(der).to_vec()),
        _ => Err(Error::ErrUnsupportedFingerprintAlgorithm(
            algorithm.to_owned(),
        )),
    }
}

impl RTCDtlsFingerprint {
    /// Computes the fingerprint of a DER encoded certificate.
    pub fn from_certificate(algorithm: &str, der: &[u8]) -> Result<Self> {
        let hashed = hash_certificate(algorithm, der)?;
        let values: Vec<String> = hashed.iter().map(|x| format!("{x:02x}")).collect();

        Ok(RTCDtlsFingerprint {
            algorithm: algorithm.to_ascii_lowercase(),
            value: values.join(":"),
        })
    }

    /// Decodes the colon-separated hex value into raw digest bytes.
    pub fn digest(&self) -> Result<Vec<u8>> {
        let octets: Vec<&str> = self.value.split(':').collect();
        if octets.iter().any(|octet| octet.len() != 2) {
            return Err(Error::ErrInvalidFingerprintValue(self.value.clone()));
        }

        hex::decode(octets.concat())
            .map_err(|_| Error::ErrInvalidFingerprintValue(self.value.clone()))
    }

    /// Checks that `der` is the certificate this fingerprint was taken from.
    pub fn verify_certificate(&self, der: &[u8]) -> Result<()> {
        let expected = self.digest()?;
        let hashed = hash_certificate(&self.algorithm, der)?;

        if hashed.ct_eq(&expected).unwrap_u8() == 1 {
            Ok(())
        } else {
            log::debug!(
                "certificate does not match {} fingerprint {}",
                self.algorithm,
                self.value
            );
            Err(Error::ErrNoMatchingCertificateFingerprint)
        }
    }
}

/// Formats as the `a=fingerprint` attribute value: `<algorithm> <value>`.
impl fmt::Display for RTCDtlsFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.value)
    }
}
