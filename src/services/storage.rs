//! Object storage service
//!
//! Thin wrapper around the S3 client that knows the configured bucket. The
//! client itself is built by `config::aws` against the profile's endpoint.

use aws_sdk_s3::Client as S3Client;

use crate::config::Settings;

/// S3-backed content storage
#[derive(Clone)]
pub struct StorageService {
    client: S3Client,
    bucket: String,
}

impl StorageService {
    pub fn new(settings: &Settings, client: S3Client) -> Self {
        Self {
            client,
            bucket: settings.aws.s3_bucket_name.clone(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Check that the configured bucket is reachable
    pub async fn health_check(&self) -> bool {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                tracing::debug!(bucket = %self.bucket, "S3 health check passed");
                true
            }
            Err(e) => {
                tracing::warn!(bucket = %self.bucket, error = %e, "S3 health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::create_s3_client;
    use std::collections::HashMap;

    fn production_settings(extra: &[(&str, &str)]) -> Settings {
        let mut external: HashMap<String, String> = [
            ("DATABASE_URL", "postgresql://prod/db"),
            ("SECRET_KEY", "secret"),
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("GOOGLE_REDIRECT_URI", "https://api.sage.app/callback"),
            ("FRONTEND_URL", "https://sage.app"),
            ("BACKEND_CORS_ORIGINS", "https://sage.app"),
            ("SUPABASE_URL", "https://ref.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("SUPABASE_SERVICE_ROLE_KEY", "role"),
            ("S3_BUCKET_NAME", "sage-prod-content"),
            ("API_GATEWAY_URL", "https://api.sage.app"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        for (k, v) in extra {
            external.insert(k.to_string(), v.to_string());
        }

        Settings::resolve("production", &external).unwrap()
    }

    async fn storage_for(settings: &Settings) -> StorageService {
        StorageService::new(settings, create_s3_client(settings).await)
    }

    #[tokio::test]
    async fn test_bucket_follows_profile() {
        let settings = Settings::resolve("dev", &HashMap::<String, String>::new()).unwrap();
        assert_eq!(storage_for(&settings).await.bucket(), "sage-dev-content");

        let settings = production_settings(&[("S3_BUCKET_NAME", "sage-prod-archive")]);
        assert_eq!(storage_for(&settings).await.bucket(), "sage-prod-archive");
    }
}
