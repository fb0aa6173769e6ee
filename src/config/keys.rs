//! Setting names
//!
//! Every setting is addressed by the environment variable name it is read
//! from. Only names listed in [`KNOWN_KEYS`] are picked up from external
//! value sources.

pub const ENVIRONMENT: &str = "ENVIRONMENT";
pub const APP_NAME: &str = "APP_NAME";
pub const APP_VERSION: &str = "APP_VERSION";
pub const DEBUG: &str = "DEBUG";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

pub const SECRET_KEY: &str = "SECRET_KEY";
pub const ALGORITHM: &str = "ALGORITHM";
pub const ACCESS_TOKEN_EXPIRE_MINUTES: &str = "ACCESS_TOKEN_EXPIRE_MINUTES";
pub const REFRESH_TOKEN_EXPIRE_DAYS: &str = "REFRESH_TOKEN_EXPIRE_DAYS";

pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
pub const GOOGLE_REDIRECT_URI: &str = "GOOGLE_REDIRECT_URI";
pub const GOOGLE_AUTHORIZATION_URL: &str = "GOOGLE_AUTHORIZATION_URL";
pub const GOOGLE_TOKEN_URL: &str = "GOOGLE_TOKEN_URL";
pub const GOOGLE_USERINFO_URL: &str = "GOOGLE_USERINFO_URL";

pub const BACKEND_CORS_ORIGINS: &str = "BACKEND_CORS_ORIGINS";
pub const FRONTEND_URL: &str = "FRONTEND_URL";
pub const DATABASE_URL: &str = "DATABASE_URL";

pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const LOCALSTACK_ENDPOINT: &str = "LOCALSTACK_ENDPOINT";
pub const S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";
pub const S3_ENDPOINT_URL: &str = "S3_ENDPOINT_URL";
pub const S3_CLOUDFRONT_DOMAIN: &str = "S3_CLOUDFRONT_DOMAIN";
pub const LAMBDA_ENDPOINT_URL: &str = "LAMBDA_ENDPOINT_URL";
pub const LAMBDA_FUNCTION_NAME: &str = "LAMBDA_FUNCTION_NAME";
pub const CLOUDWATCH_LOG_GROUP: &str = "CLOUDWATCH_LOG_GROUP";
pub const API_GATEWAY_URL: &str = "API_GATEWAY_URL";

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

pub const SENTRY_DSN: &str = "SENTRY_DSN";
pub const RATE_LIMIT_ENABLED: &str = "RATE_LIMIT_ENABLED";
pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
pub const FORCE_HTTPS: &str = "FORCE_HTTPS";

/// All names the resolver reads from external values.
///
/// `ENVIRONMENT` is not listed: the profile is chosen from the indicator
/// and pins its own value.
pub const KNOWN_KEYS: &[&str] = &[
    APP_NAME,
    APP_VERSION,
    DEBUG,
    LOG_LEVEL,
    HOST,
    PORT,
    SECRET_KEY,
    ALGORITHM,
    ACCESS_TOKEN_EXPIRE_MINUTES,
    REFRESH_TOKEN_EXPIRE_DAYS,
    GOOGLE_CLIENT_ID,
    GOOGLE_CLIENT_SECRET,
    GOOGLE_REDIRECT_URI,
    GOOGLE_AUTHORIZATION_URL,
    GOOGLE_TOKEN_URL,
    GOOGLE_USERINFO_URL,
    BACKEND_CORS_ORIGINS,
    FRONTEND_URL,
    DATABASE_URL,
    AWS_REGION,
    AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY,
    LOCALSTACK_ENDPOINT,
    S3_BUCKET_NAME,
    S3_ENDPOINT_URL,
    S3_CLOUDFRONT_DOMAIN,
    LAMBDA_ENDPOINT_URL,
    LAMBDA_FUNCTION_NAME,
    CLOUDWATCH_LOG_GROUP,
    API_GATEWAY_URL,
    SUPABASE_URL,
    SUPABASE_ANON_KEY,
    SUPABASE_SERVICE_ROLE_KEY,
    SENTRY_DSN,
    RATE_LIMIT_ENABLED,
    RATE_LIMIT_PER_MINUTE,
    FORCE_HTTPS,
];
