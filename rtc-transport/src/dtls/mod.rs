pub mod connection_role;
pub mod fingerprint;
