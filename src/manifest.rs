use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io;
use std::path::Path;
use tokio::fs;

pub const MANIFEST_FILE: &str = "package.json";

/// Defaults taken from the project manifest in the working directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub author: Option<String>,
    pub name: Option<String>,
}

impl Manifest {
    /// A missing manifest yields empty defaults. Any other read or parse failure is an error.
    pub async fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);

        match fs::read_to_string(&path).await {
            Ok(text) => Self::parse(&text)
                .with_context(|| format!("failed to parse manifest {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no manifest at {}", path.display());
                Ok(Self::default())
            }
            Err(err) => {
                Err(err).with_context(|| format!("failed to read manifest {}", path.display()))
            }
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(text)?;

        // npm accepts both "Name <email>" and { "name": ..., "email": ... }
        let author = match fields.get("author") {
            Some(Value::String(author)) => Some(author.clone()),
            Some(Value::Object(person)) => person
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => None,
        };
        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { author, name })
    }
}
