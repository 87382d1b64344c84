use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Usage ledger
    pub base_rolls_limit: i32,
    pub daily_ad_cap: i32,
    pub ad_rewards_enabled: bool,
    // Demo sessions
    pub demo_mode_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            base_rolls_limit: env::var("BASE_ROLLS_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            daily_ad_cap: env::var("DAILY_AD_CAP")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            ad_rewards_enabled: parse_flag("AD_REWARDS_ENABLED", true),
            demo_mode_enabled: parse_flag("DEMO_MODE_ENABLED", true),
        };

        if config.base_rolls_limit < 0 || config.daily_ad_cap < 0 {
            return Err("BASE_ROLLS_LIMIT and DAILY_AD_CAP must not be negative".into());
        }

        Ok(config)
    }
}

fn parse_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|s| s.to_lowercase() == "true")
        .unwrap_or(default)
}
