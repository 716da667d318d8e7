//! Sample ASN1 modules shared by the integration tests and benches.
pub mod asn1 {
    /// A subset of the MMS protocol (ISO 9506-2)
    pub const MMS: &str = include_str!("../asn/mms.asn");

    /// Certificate structures in the style of RFC 5280
    pub const PKIX: &str = include_str!("../asn/pkix.asn");

    pub fn path(file: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("asn")
            .join(file)
    }
}
