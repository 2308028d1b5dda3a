//! Reddit API credentials loaded from dotenv files.

use chapterbind_error::ConfigError;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Name of the credentials file.
pub const ENV_FILE: &str = ".env";

/// Name of the template shipped alongside the project.
pub const ENV_TEMPLATE_FILE: &str = ".env.dist";

const TEMPLATE_ID: &str = "Replace_Me";
const TEMPLATE_SECRET: &str = "Replace_Me_Too";

/// Username and password for a script-type app.
#[derive(Clone, PartialEq, Eq)]
pub struct UserLogin {
    username: String,
    password: String,
}

impl UserLogin {
    /// Returns the account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the account password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// OAuth client credentials, optionally with a user login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    login: Option<UserLogin>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("login", &self.login)
            .finish()
    }
}

impl Credentials {
    /// Create credentials for application-only access.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            login: None,
        }
    }

    /// Attach a user login.
    pub fn with_login(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.login = Some(UserLogin {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Returns the OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the user login, if one was configured.
    pub fn login(&self) -> Option<&UserLogin> {
        self.login.as_ref()
    }

    /// Load credentials from the `.env` file in `dir`.
    ///
    /// Recognised keys are `reddit_id`, `reddit_secret`, and the optional
    /// pair `reddit_username` / `reddit_password`. The login is only used
    /// when both halves are non-empty.
    ///
    /// # Errors
    ///
    /// Returns error if `.env` is missing or empty (with a diagnosis based on
    /// `.env.dist`), cannot be parsed, or lacks `reddit_id` or `reddit_secret`.
    #[instrument(skip(dir), fields(dir = %dir.display()))]
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let values = match read_env_file(&dir.join(ENV_FILE))? {
            Some(values) if !values.is_empty() => values,
            _ => return Err(diagnose_missing_env(dir)),
        };
        debug!(keys = values.len(), "Loaded credentials file");

        let client_id = required(&values, "reddit_id")?;
        let client_secret = required(&values, "reddit_secret")?;
        let credentials = Self::new(client_id, client_secret);

        match (non_empty(&values, "reddit_username"), non_empty(&values, "reddit_password")) {
            (Some(username), Some(password)) => {
                debug!(username, "Using stored username and password");
                Ok(credentials.with_login(username, password))
            }
            _ => Ok(credentials),
        }
    }
}

fn read_env_file(path: &Path) -> Result<Option<HashMap<String, String>>, ConfigError> {
    if !path.is_file() {
        return Ok(None);
    }

    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut values = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            ConfigError::new(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        values.insert(key, value);
    }
    Ok(Some(values))
}

fn diagnose_missing_env(dir: &Path) -> ConfigError {
    let template = match read_env_file(&dir.join(ENV_TEMPLATE_FILE)) {
        Ok(Some(values)) if !values.is_empty() => values,
        Ok(_) => {
            return ConfigError::new(
                "Could not load .env or .env.dist file. \
                 Please check README.md for instructions on how to add credentials to .env",
            );
        }
        Err(e) => return e,
    };

    let is_template = template.get("reddit_id").map(String::as_str) == Some(TEMPLATE_ID)
        && template.get("reddit_secret").map(String::as_str) == Some(TEMPLATE_SECRET);

    if is_template {
        ConfigError::new(
            "Could not load .env file, and found template values in .env.dist file. \
             Please check README.md for instructions on how to add credentials to .env",
        )
    } else {
        ConfigError::new(
            "Found updated values in .env.dist file but no .env file. \
             Please check README.md for instructions on how to add credentials to .env",
        )
    }
}

fn non_empty<'a>(values: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    values
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn required<'a>(values: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ConfigError> {
    non_empty(values, key)
        .ok_or_else(|| ConfigError::new(format!("No {} found. Please add it to .env", key)))
}
