use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub stripe_secret_key: String,
}

impl AppConfig {
    /// `PORT`, `ACCESS_TOKEN_SECRET` and `PAYMENT_KEY` keep the names the
    /// original deployment used.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let jwt_secret = env::var("ACCESS_TOKEN_SECRET")?;
        let stripe_secret_key = env::var("PAYMENT_KEY")?;
        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            stripe_secret_key,
        })
    }
}
