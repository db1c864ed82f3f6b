/**
 * Bearer Token Issuance
 *
 * Tokens are opaque: 16 bytes from the operating system's CSPRNG rendered
 * as 32 lowercase hex characters. Nothing is encoded in them and nothing is
 * remembered here. A token is valid exactly while it is the value stored on
 * some user, so sign-in rotation and sign-out invalidation are plain writes
 * to the user record.
 */

/// Number of random bytes in a token (128 bits)
pub const TOKEN_BYTES: usize = 16;

/// Error raised when the OS random source is unavailable
#[derive(Debug, thiserror::Error)]
#[error("random source unavailable: {0}")]
pub struct TokenError(getrandom::Error);

/// Issue a fresh bearer token
pub fn issue_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut bytes).map_err(TokenError)?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_format() {
        let token = issue_token().unwrap();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<String> = (0..256).map(|_| issue_token().unwrap()).collect();
        assert_eq!(tokens.len(), 256);
    }
}
