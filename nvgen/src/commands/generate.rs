use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use nvgen_codegen::{GenerationContext, Renderer};
use nvgen_core::build_bindings;
use nvgen_manifest::query_api_info;

use super::UnwrapOrExit;
use crate::report;

/// Directory the shipped templates live in.
const TEMPLATE_DIR: &str = "templates";

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the host binary to query for its API manifest
    pub host: PathBuf,

    /// Output directory; when omitted, print the API summary instead
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = query_api_info(&self.host).unwrap_or_exit();
        let bindings = build_bindings(&manifest);

        for diag in bindings.diagnostics.iter().filter(|d| d.severity.is_warning()) {
            eprintln!("{diag}");
        }

        match &self.output {
            Some(output) => self.run_generation(&bindings, output),
            None => {
                println!("Neovim api info:");
                report::print_api(&manifest, &bindings);
                Ok(())
            }
        }
    }

    fn run_generation(&self, bindings: &nvgen_core::BindingSet, output: &Path) -> Result<()> {
        let ctx = GenerationContext::discover(
            Path::new(TEMPLATE_DIR),
            self.host.display().to_string(),
        )?;

        println!(
            "Writing auto generated bindings for {} to {}",
            ctx.host,
            output.display()
        );
        let written = Renderer::new().generate(&ctx, bindings, output)?;
        println!("Generated {} file(s)", written.len());

        Ok(())
    }
}
