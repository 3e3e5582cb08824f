use crate::server::error::AppError;

/// bcrypt wrapper that runs hashing on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password with the configured cost.
    ///
    /// # Returns
    /// - `Ok(String)` - bcrypt hash including salt and cost
    /// - `Err(AppError::PasswordErr)` - Cost out of range or hashing failed
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let cost = self.cost;
        Ok(tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??)
    }

    /// Checks a plaintext password against a stored bcrypt hash.
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        Ok(tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_matching_password() -> Result<(), AppError> {
        let hasher = PasswordHasher::new(4);

        let hash = hasher.hash("hunter22".to_string()).await?;

        assert_ne!(hash, "hunter22");
        assert!(hasher.verify("hunter22".to_string(), hash.clone()).await?);
        assert!(!hasher.verify("hunter23".to_string(), hash).await?);

        Ok(())
    }
}
