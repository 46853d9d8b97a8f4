pub const LOCAL_ENDPOINT: &str = "http://localhost:8003";
pub const DEV_ENDPOINT: &str = "https://api-h3sm47ypsa-uc.a.run.app";
pub const PROD_ENDPOINT: &str = "https://iikaesankai.com";

pub const DEFAULT_VOTE_FILE: &str = "iikae_votes.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub env_name: String,
    pub api_endpoint: String,
    pub vote_file: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let env_name = dotenv::var("IIKAE_ENV").unwrap_or_else(|_| "local".into());
        let api_endpoint = dotenv::var("IIKAE_API_ENDPOINT").unwrap_or_else(|_| endpoint_for(&env_name).into());
        let vote_file = dotenv::var("IIKAE_VOTE_FILE").unwrap_or_else(|_| DEFAULT_VOTE_FILE.into());
        Self {
            env_name,
            api_endpoint,
            vote_file,
        }
    }
}

pub fn endpoint_for(env_name: &str) -> &'static str {
    match env_name {
        "local" => LOCAL_ENDPOINT,
        "prod" => PROD_ENDPOINT,
        _ => DEV_ENDPOINT,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_endpoint_for() {
        assert_eq!(endpoint_for("local"), LOCAL_ENDPOINT);
        assert_eq!(endpoint_for("prod"), PROD_ENDPOINT);
        assert_eq!(endpoint_for("dev"), DEV_ENDPOINT);
        assert_eq!(endpoint_for("staging"), DEV_ENDPOINT);
    }
}
