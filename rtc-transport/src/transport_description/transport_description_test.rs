use super::*;
use shared::error::Error;

const UFRAG: &str = "F7gI";
const PWD: &str = "x9cml/YzichV2+XlhiMu8g";

fn fingerprint() -> RTCDtlsFingerprint {
    RTCDtlsFingerprint {
        algorithm: "sha-256".to_owned(),
        value: "AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89".to_owned(),
    }
}

fn description() -> TransportDescription {
    let mut td = TransportDescription::new(
        vec![ICE_OPTION_TRICKLE.to_owned(), ICE_OPTION_RENOMINATION.to_owned()],
        UFRAG,
        PWD,
        IceMode::Lite,
        ConnectionRole::ActPass,
        Some(&fingerprint()),
    );
    td.opaque_parameters
        .insert("protocol".to_owned(), "dtls-srtp".to_owned());
    td
}

#[test]
fn test_transport_description_default() {
    let td = TransportDescription::default();
    assert!(td.transport_options.is_empty());
    assert_eq!(td.ice_ufrag, "");
    assert_eq!(td.ice_pwd, "");
    assert_eq!(td.ice_mode, IceMode::Full);
    assert_eq!(td.connection_role, ConnectionRole::None);
    assert_eq!(td.identity_fingerprint, None);
    assert!(td.opaque_parameters.is_empty());
    assert!(!td.secure());
}

#[test]
fn test_transport_description_new() {
    let fp = fingerprint();
    let td = TransportDescription::new(
        vec!["trickle".to_owned()],
        UFRAG,
        PWD,
        IceMode::Lite,
        ConnectionRole::Passive,
        Some(&fp),
    );

    assert_eq!(td.transport_options, vec!["trickle".to_owned()]);
    assert_eq!(td.ice_ufrag, UFRAG);
    assert_eq!(td.ice_pwd, PWD);
    assert_eq!(td.ice_mode, IceMode::Lite);
    assert_eq!(td.connection_role, ConnectionRole::Passive);
    assert_eq!(td.identity_fingerprint.as_ref(), Some(&fp));
    assert!(td.secure());

    let no_fp = TransportDescription::new(
        vec![],
        UFRAG,
        PWD,
        IceMode::Full,
        ConnectionRole::Active,
        None,
    );
    assert_eq!(no_fp.identity_fingerprint, None);
    assert!(!no_fp.secure());
}

#[test]
fn test_transport_description_does_not_validate() {
    // construction stores whatever it is given
    let td = TransportDescription::with_credentials("u", "p");
    assert_eq!(td.ice_ufrag, "u");
    assert_eq!(td.ice_pwd, "p");
    assert_eq!(td.ice_mode, IceMode::Full);
    assert_eq!(td.connection_role, ConnectionRole::None);
    assert!(td.get_ice_parameters().is_err());
}

#[test]
fn test_transport_description_clone_is_deep() {
    let mut source = description();
    let copy = source.clone();

    assert_eq!(copy, source);

    let source_value = source
        .identity_fingerprint
        .as_ref()
        .map(|fp| fp.value.as_ptr());
    let copy_value = copy
        .identity_fingerprint
        .as_ref()
        .map(|fp| fp.value.as_ptr());
    assert_ne!(source_value, copy_value, "fingerprint storage is shared");

    if let Some(fp) = source.identity_fingerprint.as_mut() {
        fp.value = "00:11".to_owned();
    }
    source.opaque_parameters.clear();
    assert_eq!(copy.identity_fingerprint, Some(fingerprint()));
    assert_eq!(copy.opaque_parameters.len(), 1);

    drop(source);
    assert_eq!(copy.identity_fingerprint, Some(fingerprint()));
}

#[test]
fn test_transport_description_clone_from() {
    let source = description();
    let mut target = TransportDescription::with_credentials("other", "otherpasswordotherpassword");
    target.clone_from(&source);
    assert_eq!(target, source);

    // assigning an empty description drops the fingerprint
    target.clone_from(&TransportDescription::default());
    assert_eq!(target.identity_fingerprint, None);
    assert!(source.secure());
}

#[test]
fn test_transport_description_self_assignment() {
    let mut td = description();
    let before = td.clone();

    td = td.clone();
    assert_eq!(td, before);
}

#[test]
fn test_transport_description_options() {
    let mut td = TransportDescription::with_credentials(UFRAG, PWD);
    assert!(!td.has_option(ICE_OPTION_TRICKLE));

    td.add_option(ICE_OPTION_TRICKLE);
    td.add_option("google-ice");
    td.add_option(ICE_OPTION_TRICKLE);

    assert!(td.has_option(ICE_OPTION_TRICKLE));
    assert!(!td.has_option("trick"));
    assert_eq!(
        td.transport_options,
        vec![
            "trickle".to_owned(),
            "google-ice".to_owned(),
            "trickle".to_owned()
        ]
    );
}

#[test]
fn test_transport_description_get_ice_parameters() -> Result<()> {
    let td = description();
    let params = td.get_ice_parameters()?;
    assert_eq!(params.ufrag(), UFRAG);
    assert_eq!(params.pwd(), PWD);
    assert!(params.renomination());

    let plain = TransportDescription::with_credentials(UFRAG, PWD).get_ice_parameters()?;
    assert!(!plain.renomination());

    let legacy = TransportDescription::default().get_ice_parameters()?;
    assert!(legacy.is_empty());

    let half = TransportDescription::with_credentials("", PWD);
    assert_eq!(
        half.get_ice_parameters(),
        Err(Error::ErrIceUfragLength { min: 4, max: 256 })
    );

    Ok(())
}
