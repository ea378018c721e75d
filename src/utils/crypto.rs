use crate::utils::AppError;

/// bcrypt only reads this many bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes a password with a per-call random salt. Runs on the blocking pool
/// since bcrypt is deliberately slow.
/// Passwords over `MAX_PASSWORD_BYTES` are refused.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::InvalidRequest(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Hashing(format!("Task join error: {}", e)))?
        .map_err(|e| AppError::Hashing(e.to_string()))
}

/// Checks a password against a stored bcrypt hash.
///
/// A stored value that is not a bcrypt hash never verifies, and neither does
/// a password too long to have been hashed.
pub async fn verify_password(password: String, stored_hash: String) -> Result<bool, AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }

    let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| AppError::Hashing(format!("Task join error: {}", e)))?;

    match result {
        Ok(valid) => Ok(valid),
        Err(e) => {
            log::warn!("⚠️  Unreadable password hash: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_hash_then_verify() {
        let hash = hash_password("s3cret".into(), 4).await.unwrap();

        assert_ne!(hash, "s3cret");
        assert!(verify_password("s3cret".into(), hash.clone()).await.unwrap());
        assert!(!verify_password("S3cret".into(), hash).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_hashes_are_salted() {
        let a = hash_password("same".into(), 4).await.unwrap();
        let b = hash_password("same".into(), 4).await.unwrap();
        assert_ne!(a, b);
    }

    #[actix_rt::test]
    async fn test_password_length_limit() {
        let longest = "x".repeat(MAX_PASSWORD_BYTES);
        let hash = hash_password(longest.clone(), 4).await.unwrap();
        assert!(verify_password(longest.clone(), hash.clone()).await.unwrap());

        let too_long = format!("{}A", longest);
        let err = hash_password(too_long.clone(), 4).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));

        // Same first 72 bytes as the stored password
        assert!(!verify_password(too_long, hash).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_plaintext_store_never_verifies() {
        assert!(!verify_password("password".into(), "password".into()).await.unwrap());
    }
}
