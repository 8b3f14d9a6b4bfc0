use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    pub cors: CorsConfig,
    pub predictor: PredictorConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.try_into().map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictorConfig {
    #[serde(deserialize_with = "deserialize_predictor_mode")]
    pub mode: PredictorMode,
}

fn deserialize_predictor_mode<'de, D>(deserializer: D) -> Result<PredictorMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.try_into().map_err(serde::de::Error::custom)
}

/// Which prediction backend to run. `Mock` ignores the frame entirely;
/// `Toy` scores the frame with an untrained linear model before applying
/// the same no-sign override.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub enum PredictorMode {
    Mock,
    Toy,
}

impl PredictorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictorMode::Mock => "mock",
            PredictorMode::Toy => "toy",
        }
    }
}

impl TryFrom<String> for PredictorMode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "toy" => Ok(Self::Toy),
            other => Err(format!(
                "{} is not a supported predictor mode. Use either `mock` or `toy`.",
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            other => Err(format!(
                "{} is not a supported minimum log level. Use either `debug` or `info`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Config, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let config = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(format!("{}.yaml", environment.as_str())),
        ))
        .add_source(
            config::Environment::with_prefix("GP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let config: Config = config.try_deserialize::<Config>()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictor_mode_parses_case_insensitively() {
        assert_eq!(
            PredictorMode::try_from("Toy".to_string()).unwrap(),
            PredictorMode::Toy
        );
        assert_eq!(
            PredictorMode::try_from("MOCK".to_string()).unwrap(),
            PredictorMode::Mock
        );
        assert!(PredictorMode::try_from("onnx".to_string()).is_err());
    }

    #[test]
    fn log_level_rejects_unknown_values() {
        assert!(LogLevel::try_from("trace".to_string()).is_err());
        assert_eq!(
            LogLevel::try_from("debug".to_string()).unwrap().as_str(),
            "debug"
        );
    }
}
