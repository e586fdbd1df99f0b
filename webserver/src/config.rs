//! Command line and environment configuration
//!
//! Every flag can also be supplied through an environment variable; a `.env`
//! file is loaded before parsing when present.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use url::Url;

use catalog::PromotionRules;
use crate::error::{WebServerError, WebServerResult};

/// Raw command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Restaurant menu catalog HTTP service")]
pub struct Args {
    /// Interface to bind (IP address)
    #[arg(long, env = "MENU_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP server
    #[arg(long, env = "MENU_PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON file holding the catalog
    #[arg(long, env = "MENU_DATA_FILE", default_value = "./data.json")]
    pub data_file: PathBuf,

    /// Recipe search endpoint
    #[arg(
        long,
        env = "MENU_RECIPE_API_URL",
        default_value = "https://www.themealdb.com/api/json/v1/1/search.php"
    )]
    pub recipe_api_url: String,

    /// Upper bound for a recipe search request
    #[arg(long, env = "MENU_UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MENU_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Percent off on the discount day
    #[arg(long, env = "MENU_DISCOUNT_PERCENT", default_value_t = 15)]
    pub discount_percent: u8,

    /// Smallest party that gets complimentary drinks
    #[arg(long, env = "MENU_GROUP_THRESHOLD", default_value_t = 4)]
    pub group_threshold: u32,

    /// Smallest weekend bill that earns a free sweet
    #[arg(long, env = "MENU_SWEET_THRESHOLD", default_value_t = 1000)]
    pub sweet_threshold: u64,

    /// Fixed price for imported recipes; random within 300..=800 when unset
    #[arg(long, env = "MENU_PLACEHOLDER_PRICE")]
    pub placeholder_price: Option<u64>,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub data_file: PathBuf,
    pub recipe_api_url: Url,
    pub upstream_timeout: Duration,
    pub rules: PromotionRules,
    pub placeholder_price: Option<u64>,
}

impl Args {
    pub fn into_config(self) -> WebServerResult<ServerConfig> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid host '{}': {}", self.host, e)))?;

        let recipe_api_url = Url::parse(&self.recipe_api_url).map_err(|e| {
            WebServerError::config(format!("Invalid recipe API URL '{}': {}", self.recipe_api_url, e))
        })?;
        if !matches!(recipe_api_url.scheme(), "http" | "https") {
            return Err(WebServerError::config(format!(
                "Recipe API URL must be http or https, got '{}'",
                recipe_api_url.scheme()
            )));
        }

        if self.upstream_timeout_secs == 0 {
            return Err(WebServerError::config("Upstream timeout must be at least 1 second"));
        }
        if self.discount_percent > 100 {
            return Err(WebServerError::config(format!(
                "Discount percent must be 0-100, got {}",
                self.discount_percent
            )));
        }

        let rules = PromotionRules {
            discount_percent: self.discount_percent,
            group_threshold: self.group_threshold,
            sweet_threshold: self.sweet_threshold,
            ..PromotionRules::default()
        };

        Ok(ServerConfig {
            bind_address: SocketAddr::new(ip, self.port),
            data_file: self.data_file,
            recipe_api_url,
            upstream_timeout: Duration::from_secs(self.upstream_timeout_secs),
            rules,
            placeholder_price: self.placeholder_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["webserver"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).into_config().unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.data_file, PathBuf::from("./data.json"));
        assert_eq!(config.recipe_api_url.host_str(), Some("www.themealdb.com"));
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.rules, PromotionRules::default());
        assert_eq!(config.placeholder_price, None);
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "--host", "0.0.0.0",
            "--port", "8081",
            "--discount-percent", "20",
            "--group-threshold", "6",
            "--sweet-threshold", "1500",
            "--placeholder-price", "450",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.bind_address.port(), 8081);
        assert_eq!(config.rules.discount_percent, 20);
        assert_eq!(config.rules.group_threshold, 6);
        assert_eq!(config.rules.sweet_threshold, 1500);
        assert_eq!(config.placeholder_price, Some(450));
    }

    #[test]
    fn test_rejects_bad_host() {
        let err = parse(&["--host", "not an ip"]).into_config().unwrap_err();
        assert!(matches!(err, WebServerError::Config { .. }));
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = parse(&["--recipe-api-url", "::nope"]).into_config().unwrap_err();
        assert!(matches!(err, WebServerError::Config { .. }));

        let err = parse(&["--recipe-api-url", "ftp://recipes.example/search"]).into_config().unwrap_err();
        assert!(matches!(err, WebServerError::Config { .. }));
    }

    #[test]
    fn test_rejects_discount_over_100() {
        let err = parse(&["--discount-percent", "101"]).into_config().unwrap_err();
        assert!(matches!(err, WebServerError::Config { .. }));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = parse(&["--upstream-timeout-secs", "0"]).into_config().unwrap_err();
        assert!(matches!(err, WebServerError::Config { .. }));
    }
}
