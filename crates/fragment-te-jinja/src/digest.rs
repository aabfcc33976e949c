//! Template body fingerprinting.
//!
//! Cache keys are the raw digest bytes of the template body under a
//! configurable algorithm, so byte-identical bodies always map to the same
//! cache entry regardless of fragment id or payload. A fresh hasher is used
//! per call; nothing here holds mutable state across renders.

use fragment_te_api::{TemplateEngineError, TemplateResult};

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// A digest algorithm used to fingerprint template bodies for cache keys.
///
/// Parsed from the `cacheKeyAlgorithm` option, accepting Java-Security
/// style names case-insensitively with or without the dash (`"MD5"`,
/// `"SHA-1"`, `"sha256"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKeyAlgorithm {
    /// MD5, 16-byte fingerprints. The default; collision weakness is an
    /// accepted risk for an in-memory cache key.
    Md5,
    /// SHA-1, 20-byte fingerprints.
    Sha1,
    /// SHA-256, 32-byte fingerprints.
    Sha256,
    /// SHA-512, 64-byte fingerprints.
    Sha512,
}

impl CacheKeyAlgorithm {
    /// Parses an algorithm name, failing with a configuration error when
    /// no such digest implementation exists.
    pub fn parse(name: &str) -> TemplateResult<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "MD5" => Ok(Self::Md5),
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(TemplateEngineError::Configuration(format!(
                "no such digest algorithm: {name}"
            ))),
        }
    }

    /// Digests a template body into raw fingerprint bytes.
    pub fn fingerprint(self, body: &str) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(body.as_bytes()).to_vec(),
            Self::Sha1 => Sha1::digest(body.as_bytes()).to_vec(),
            Self::Sha256 => Sha256::digest(body.as_bytes()).to_vec(),
            Self::Sha512 => Sha512::digest(body.as_bytes()).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_java_security_names() {
        assert_eq!(CacheKeyAlgorithm::parse("MD5").unwrap(), CacheKeyAlgorithm::Md5);
        assert_eq!(CacheKeyAlgorithm::parse("SHA-1").unwrap(), CacheKeyAlgorithm::Sha1);
        assert_eq!(CacheKeyAlgorithm::parse("SHA-256").unwrap(), CacheKeyAlgorithm::Sha256);
        assert_eq!(CacheKeyAlgorithm::parse("SHA-512").unwrap(), CacheKeyAlgorithm::Sha512);
    }

    #[test]
    fn test_parse_is_case_and_dash_insensitive() {
        assert_eq!(CacheKeyAlgorithm::parse("md5").unwrap(), CacheKeyAlgorithm::Md5);
        assert_eq!(CacheKeyAlgorithm::parse("sha256").unwrap(), CacheKeyAlgorithm::Sha256);
        assert_eq!(CacheKeyAlgorithm::parse("Sha-512").unwrap(), CacheKeyAlgorithm::Sha512);
    }

    #[test]
    fn test_parse_unknown_algorithm_fails() {
        let err = CacheKeyAlgorithm::parse("CRC32").unwrap_err();
        assert!(matches!(err, TemplateEngineError::Configuration(_)));
        assert!(err.to_string().contains("CRC32"));
    }

    #[test]
    fn test_fingerprint_lengths() {
        assert_eq!(CacheKeyAlgorithm::Md5.fingerprint("x").len(), 16);
        assert_eq!(CacheKeyAlgorithm::Sha1.fingerprint("x").len(), 20);
        assert_eq!(CacheKeyAlgorithm::Sha256.fingerprint("x").len(), 32);
        assert_eq!(CacheKeyAlgorithm::Sha512.fingerprint("x").len(), 64);
    }

    #[test]
    fn test_identical_bodies_share_a_fingerprint() {
        let a = CacheKeyAlgorithm::Md5.fingerprint("Hello {{ name }}!");
        let b = CacheKeyAlgorithm::Md5.fingerprint("Hello {{ name }}!");
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_body_change_changes_the_fingerprint() {
        let a = CacheKeyAlgorithm::Md5.fingerprint("Hello {{ name }}!");
        let b = CacheKeyAlgorithm::Md5.fingerprint("Hello {{ name }}?");
        assert_ne!(a, b);
    }

    #[test]
    fn test_known_md5_fingerprint() {
        // MD5("abc") = 900150983cd24fb0d6963f7d28e17f72
        let fp = CacheKeyAlgorithm::Md5.fingerprint("abc");
        assert_eq!(fp[0], 0x90);
        assert_eq!(fp[15], 0x72);
    }
}
