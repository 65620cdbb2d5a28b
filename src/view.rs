use crate::templates::TemplateStore;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser)]
pub struct View {
    /// The license to show, for example `bsd`.
    license: Option<String>,
}

impl View {
    pub fn run(&self, store: &TemplateStore) -> Result<()> {
        let Some(license) = self.license() else {
            eprintln!("Error: license name missing");
            crate::help::command(store).write_help(&mut io::stderr())?;

            return Ok(());
        };
        log::info!("view {license}");

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(show(store, &license, &mut io::stdout()))
    }

    fn license(&self) -> Option<String> {
        self.license
            .as_deref()
            .filter(|license| !license.is_empty())
            .map(str::to_lowercase)
    }
}

/// Writes the raw template, byte for byte.
async fn show(store: &TemplateStore, license: &str, out: &mut impl Write) -> Result<()> {
    let text = store.read(license).await?;
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}
