use crate::manifest::Manifest;
use crate::render::{render, Placeholders};
use crate::templates::TemplateStore;
use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::fs;

const OUTPUT_FILE: &str = "LICENSE";

#[derive(Parser)]
pub struct Install {
    /// The license to generate, for example `mit`.
    license: String,

    /// The year to use. Example: 2014.
    #[clap(short, long)]
    year: Option<String>,

    /// Your fullname.
    #[clap(short = 'n', long)]
    fullname: Option<String>,

    /// Project name.
    #[clap(short, long, value_name = "PROJECT NAME")]
    project: Option<String>,

    /// The file extension for the license. Example: txt. Defaults to no extension.
    #[clap(short, long)]
    extension: Option<String>,
}

/// The resolved values for one `install` invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub license: String,
    pub year: String,
    pub fullname: String,
    pub project: String,
    pub extension: Option<String>,
}

impl GenerationRequest {
    /// Options win over manifest fields, which win over the built-in defaults.
    pub fn resolve(options: &Install, manifest: &Manifest, current_year: i32) -> Self {
        Self {
            license: options.license.to_lowercase(),
            year: given(&options.year).unwrap_or_else(|| current_year.to_string()),
            fullname: given(&options.fullname)
                .or_else(|| given(&manifest.author))
                .unwrap_or_default(),
            project: given(&options.project)
                .or_else(|| given(&manifest.name))
                .unwrap_or_default(),
            extension: given(&options.extension),
        }
    }

    pub fn file_name(&self) -> String {
        match &self.extension {
            Some(extension) => format!("{OUTPUT_FILE}.{extension}"),
            None => OUTPUT_FILE.to_string(),
        }
    }

    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Successfully added {} license to ./{} file.",
            self.license,
            self.file_name()
        )
    }

    fn placeholders(&self) -> Placeholders<'_> {
        Placeholders {
            year: &self.year,
            fullname: &self.fullname,
            project: &self.project,
        }
    }
}

fn given(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

impl Install {
    pub fn run(&self, store: &TemplateStore) -> Result<()> {
        log::info!("install {}", self.license);

        let dir = env::current_dir().context("could not determine working directory")?;
        let runtime = tokio::runtime::Runtime::new()?;
        let request = runtime.block_on(self.generate(store, &dir))?;

        request.report(&mut io::stdout())?;

        Ok(())
    }

    /// Writes the rendered license into `dir` and returns the request it was rendered from.
    async fn generate(&self, store: &TemplateStore, dir: &Path) -> Result<GenerationRequest> {
        let manifest = Manifest::load(dir).await?;
        let request = GenerationRequest::resolve(self, &manifest, Utc::now().year());
        log::debug!("resolved {request:?}");

        let template = store.read(&request.license).await?;
        let content = render(&template, &request.placeholders());

        let path: PathBuf = dir.join(request.file_name());
        fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());

        Ok(request)
    }
}
