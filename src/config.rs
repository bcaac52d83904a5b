use anyhow::{bail, Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_CONNECTION_STRING: &str = "Data Source=Pizzas.db";

#[derive(Clone, Debug)]
pub struct PizzaConfig {
    /// The `Pizzas` connection string, either a sqlx URL or `Data Source=...`.
    pub connection_string: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl PizzaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // ConnectionStrings__Pizzas is how ASP.NET-style deployments name it
        let connection_string = ["PIZZAS_CONNECTION_STRING", "ConnectionStrings__Pizzas"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|val| !val.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONNECTION_STRING.to_string());

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|val| *val > 0)
            .unwrap_or(15);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            connection_string,
            max_connections,
            host,
            port,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    pub fn is_in_memory(&self) -> bool {
        self.store_options()
            .map(|store| store.in_memory)
            .unwrap_or(false)
    }

    pub fn store_options(&self) -> Result<StoreOptions> {
        parse_connection_string(&self.connection_string)
    }
}

/// Where the pizza store lives, resolved from a connection string.
#[derive(Clone, Debug)]
pub struct StoreOptions {
    pub options: SqliteConnectOptions,
    /// The database vanishes with its last connection.
    pub in_memory: bool,
}

impl StoreOptions {
    fn file(options: SqliteConnectOptions) -> Self {
        Self {
            options,
            in_memory: false,
        }
    }

    fn memory(options: SqliteConnectOptions) -> Self {
        Self {
            options,
            in_memory: true,
        }
    }
}

/// Accepts `sqlite:` URLs as-is, otherwise reads `Data Source` (or `Filename`)
/// and `Mode` out of a `key=value;key=value` connection string.
pub fn parse_connection_string(raw: &str) -> Result<StoreOptions> {
    let raw = raw.trim();

    if raw.starts_with("sqlite:") {
        let options = SqliteConnectOptions::from_str(raw)
            .with_context(|| format!("invalid sqlite url {raw}"))?;
        return Ok(if url_is_in_memory(raw) {
            StoreOptions::memory(options)
        } else {
            StoreOptions::file(options.create_if_missing(true))
        });
    }

    let mut data_source = None;
    let mut mode = None;
    for pair in raw.split(';').filter(|pair| !pair.trim().is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("malformed connection string segment '{}'", pair.trim());
        };
        let value = value.trim().to_string();
        match key.trim().to_ascii_lowercase().as_str() {
            "data source" | "datasource" | "filename" => data_source = Some(value),
            "mode" => mode = Some(value),
            _ => {}
        }
    }

    let Some(data_source) = data_source.filter(|val| !val.is_empty()) else {
        bail!("connection string has no Data Source: '{raw}'");
    };

    let mode = mode.unwrap_or_else(|| "ReadWriteCreate".to_string());
    let mode_key = mode.to_ascii_lowercase();
    if !matches!(
        mode_key.as_str(),
        "readwritecreate" | "readwrite" | "readonly" | "memory"
    ) {
        bail!("unsupported connection string Mode '{mode}'");
    }

    if mode_key == "memory" || data_source == ":memory:" {
        return memory_store(&data_source);
    }

    let options = SqliteConnectOptions::new().filename(data_source);
    Ok(StoreOptions::file(match mode_key.as_str() {
        "readwrite" => options,
        "readonly" => options.read_only(true),
        _ => options.create_if_missing(true),
    }))
}

// a named in-memory database is shared by every connection that opens it
fn memory_store(name: &str) -> Result<StoreOptions> {
    let url = if name == ":memory:" {
        "sqlite::memory:".to_string()
    } else {
        format!("sqlite:file:{name}?mode=memory&cache=shared")
    };
    let options = SqliteConnectOptions::from_str(&url)
        .with_context(|| format!("invalid in-memory store name '{name}'"))?;
    Ok(StoreOptions::memory(options))
}

fn url_is_in_memory(url: &str) -> bool {
    let (database, query) = url.split_once('?').unwrap_or((url, ""));
    database.ends_with(":memory:")
        || query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == "mode" && value == "memory")
}
