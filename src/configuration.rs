use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    /// Delay before the post-submit list reload, giving the store's write
    /// time to become consistently readable.
    #[serde(default = "default_reload_delay_ms")]
    pub reload_delay_ms: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

fn default_reload_delay_ms() -> u64 {
    1000
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

impl Settings {
    /// Reject incomplete or placeholder settings before any connection is
    /// attempted. A misconfigured store must fail startup with a message
    /// naming the offending field, not surface later as a doomed query.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let fields = [
            ("app_host", self.app_host.as_str()),
            ("database.username", self.database.username.as_str()),
            ("database.password", self.database.password.as_str()),
            ("database.host", self.database.host.as_str()),
            ("database.database_name", self.database.database_name.as_str()),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "configuration field '{}' is missing or empty",
                    name
                )));
            }
            if is_placeholder(value) {
                return Err(config::ConfigError::Message(format!(
                    "configuration field '{}' still holds the placeholder value '{}'",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn is_placeholder(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value.contains("changeme") || value.starts_with("your-") || value == "placeholder"
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    let mut settings = config::Config::default();
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    let config: Settings = settings.try_deserialize()?;
    config.validate()?;

    Ok(config)
}
