use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

/// The only claim the client cares about. The signature is never verified
/// here; the backend owns token validity, the frontend only reads `exp`
/// to know when to evict the session.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Standard JWT expiry (Unix timestamp, seconds)
    exp: i64,
}

/// Decode the payload segment of a JWT and extract its `exp` claim.
pub fn decode_exp(token: &str) -> Result<i64, String> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| "token has no payload segment".to_string())?;

    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| format!("payload is not valid base64url: {}", e))?;

    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| format!("payload is not valid JSON: {}", e))?;

    Ok(claims.exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(payload_json);
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn extracts_exp_from_well_formed_token() {
        let token = make_token(r#"{"sub":"an.nguyen","exp":1767225600}"#);
        assert_eq!(decode_exp(&token), Ok(1767225600));
    }

    #[test]
    fn rejects_token_without_payload_segment() {
        assert!(decode_exp("not-a-jwt").is_err());
    }

    #[test]
    fn rejects_token_with_garbage_payload() {
        assert!(decode_exp("abc.!!!not-base64!!!.def").is_err());
    }

    #[test]
    fn rejects_payload_missing_exp() {
        let token = make_token(r#"{"sub":"an.nguyen"}"#);
        assert!(decode_exp(&token).is_err());
    }
}
