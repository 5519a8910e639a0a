use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde_json::Value;
use std::fmt;

/// Tokens are issued base64url-encoded without padding, but older clients
/// stored standard-alphabet payloads. Both decode.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Opaque bearer token persisted in browser storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a stored value. Empty strings count as no credential.
    pub fn from_stored(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Credential)
    }

    pub fn new(raw: impl Into<String>) -> Self {
        Credential(raw.into())
    }

    /// The raw token, for the `Authorization` header and for storage.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Decode the claims carried in the token payload, without verification.
    pub fn claims(&self) -> Option<Claims> {
        decode_claims(&self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Claims the client acts on. Every other payload field is ignored,
/// whatever its type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    /// `None` when the claim is absent or not a string.
    pub role: Option<String>,
}

/// Parse the payload segment of a `header.payload.signature` token.
///
/// Returns `None` for anything that is not a dot-separated token with a
/// base64-encoded JSON object in the second position.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    let object = value.as_object()?;
    Some(Claims {
        role: object.get("role").and_then(Value::as_str).map(str::to_string),
    })
}

/// Role of the signed-in operator, as far as the client can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Standard,
    /// No role claim, or the credential could not be decoded.
    #[default]
    Invalid,
}

impl Role {
    /// Interpret a raw role value. Only the exact string `"admin"` is Admin.
    pub fn from_claim(role: Option<&str>) -> Self {
        match role {
            Some("admin") => Role::Admin,
            Some(_) => Role::Standard,
            None => Role::Invalid,
        }
    }

    /// Role carried in a credential's claims.
    pub fn from_credential(credential: &Credential) -> Self {
        credential
            .claims()
            .map(|c| Role::from_claim(c.role.as_deref()))
            .unwrap_or(Role::Invalid)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
