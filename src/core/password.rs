use crate::core::errors::CoursehubError;

/// bcrypt work factor used for every stored password.
pub const HASH_COST: u32 = 10;

// bcrypt is CPU bound, so both calls run on the blocking pool.

pub async fn hash_password(password: String) -> Result<String, CoursehubError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|e| CoursehubError::InternalServerError(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| CoursehubError::PasswordHashing(e.to_string()))
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, CoursehubError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| CoursehubError::InternalServerError(format!("Password verification task failed: {}", e)))?
        .map_err(|e| CoursehubError::PasswordHashing(format!("Password verification error: {}", e)))
}
