use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::{env, fs};

/// Overrides the directory templates are read from.
pub const TEMPLATES_ENV: &str = "LICENSE_GENERATOR_TEMPLATES";

const TEMPLATE_EXTENSION: &str = "txt";

/// Templates compiled into the binary from `licenses/`.
const BUNDLED: &[(&str, &str)] = &[
    ("mit", include_str!("../licenses/mit.txt")),
    ("isc", include_str!("../licenses/isc.txt")),
    ("bsd", include_str!("../licenses/bsd.txt")),
    ("bsd3", include_str!("../licenses/bsd3.txt")),
    ("unlicense", include_str!("../licenses/unlicense.txt")),
    ("zlib", include_str!("../licenses/zlib.txt")),
    ("wtfpl", include_str!("../licenses/wtfpl.txt")),
];

enum Source {
    Bundled,
    Dir(PathBuf),
}

/// Read-only license templates, one `<license>.txt` per license.
pub struct TemplateStore {
    source: Source,
}

impl TemplateStore {
    /// A store backed by a directory on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Dir(dir.into()),
        }
    }

    pub fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    /// Uses `LICENSE_GENERATOR_TEMPLATES` when set, otherwise the templates built into the binary.
    pub fn from_env() -> Self {
        match env::var_os(TEMPLATES_ENV) {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                log::debug!("template store at {}", dir.display());
                Self::new(dir)
            }
            None => Self::bundled(),
        }
    }

    /// License names in store order, with the file extension stripped.
    pub fn licenses(&self) -> Result<Vec<String>> {
        let dir = match &self.source {
            Source::Bundled => {
                return Ok(BUNDLED.iter().map(|(name, _)| name.to_string()).collect())
            }
            Source::Dir(dir) => dir,
        };

        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to list templates in {}", dir.display()))?;

        let mut licenses = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if let Some(stem) = path.file_stem() {
                licenses.push(stem.to_string_lossy().into_owned());
            }
        }

        Ok(licenses)
    }

    pub async fn read(&self, license: &str) -> Result<String> {
        let file_name = format!("{license}.{TEMPLATE_EXTENSION}");

        match &self.source {
            Source::Bundled => BUNDLED
                .iter()
                .find(|(name, _)| *name == license)
                .map(|(_, text)| text.to_string())
                .ok_or_else(|| anyhow!("failed to read template {file_name}: no such license")),
            Source::Dir(dir) => {
                let path = dir.join(file_name);
                log::debug!("reading template {}", path.display());

                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read template {}", path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, TemplateStore) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let store = TemplateStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn lists_licenses_without_extension() {
        let (_dir, store) = store_with(&[("mit.txt", "m"), ("bsd3.txt", "b"), ("gpl.txt", "g")]);

        let mut licenses = store.licenses().unwrap();
        licenses.sort();

        assert_eq!(licenses, vec!["bsd3", "gpl", "mit"]);
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path().join("nope"));

        assert!(store.licenses().is_err());
    }

    #[tokio::test]
    async fn reads_template_verbatim() {
        let content = "Copyright [year] [fullname]\n\n  indented\r\nline\n";
        let (_dir, store) = store_with(&[("mit.txt", content)]);

        assert_eq!(store.read("mit").await.unwrap(), content);
    }

    #[tokio::test]
    async fn unknown_license_names_the_missing_file() {
        let (_dir, store) = store_with(&[("mit.txt", "m")]);

        let err = store.read("bsd").await.unwrap_err();

        assert!(format!("{err:#}").contains("bsd.txt"));
    }

    #[tokio::test]
    async fn bundled_templates_need_no_directory() {
        let store = TemplateStore::bundled();

        assert_eq!(
            store.licenses().unwrap(),
            vec!["mit", "isc", "bsd", "bsd3", "unlicense", "zlib", "wtfpl"]
        );

        let mit = store.read("mit").await.unwrap();
        assert!(mit.starts_with("The MIT License (MIT)\n"));
        assert!(mit.contains("[year]"));
        assert!(mit.contains("[fullname]"));
        assert!(store.read("bsd3").await.unwrap().contains("[project]"));
    }

    #[tokio::test]
    async fn unknown_bundled_license_fails() {
        let err = TemplateStore::bundled().read("gpl").await.unwrap_err();

        assert!(format!("{err:#}").contains("gpl.txt"));
    }

    #[tokio::test]
    async fn bundled_table_matches_licenses_directory() {
        let dir = TemplateStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/licenses"));
        let bundled = TemplateStore::bundled();

        let mut on_disk = dir.licenses().unwrap();
        let mut embedded = bundled.licenses().unwrap();
        on_disk.sort();
        embedded.sort();
        assert_eq!(on_disk, embedded);

        for license in embedded {
            assert_eq!(
                bundled.read(&license).await.unwrap(),
                dir.read(&license).await.unwrap()
            );
        }
    }
}
