//! Template rendering and output writing.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, WrapErr, bail, eyre};
use minijinja::{Environment, context};
use nvgen_core::BindingSet;

use crate::context::GenerationContext;

/// Renders templates against a binding set and writes the results.
///
/// Output files are produced one at a time; each file is fully written and
/// formatted before the next one starts.
pub struct Renderer {
    format_output: bool,
}

impl Renderer {
    /// A renderer that runs `rustfmt` on every written file.
    pub fn new() -> Self {
        Self {
            format_output: true,
        }
    }

    /// A renderer that skips the formatting pass. Used by tests.
    pub fn without_formatting() -> Self {
        Self {
            format_output: false,
        }
    }

    /// Render one template source against the binding set.
    ///
    /// Templates receive `functions` (valid entries only, every derived
    /// field populated), `exttypes` (name -> extension tag), and `date`.
    pub fn render_to_string(
        &self,
        source: &str,
        bindings: &BindingSet,
        ctx: &GenerationContext,
    ) -> Result<String> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        let rendered = env
            .render_str(
                source,
                context! {
                    functions => &bindings.functions,
                    exttypes => &bindings.exttypes,
                    date => ctx.date(),
                },
            )
            .wrap_err("template rendering failed")?;
        Ok(rendered)
    }

    /// Render every template in the context into `output_dir`, creating the
    /// directory if absent. Returns the written paths.
    ///
    /// Any read, render, write, or format failure is surfaced with the file
    /// it belongs to and aborts the run.
    pub fn generate(
        &self,
        ctx: &GenerationContext,
        bindings: &BindingSet,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).wrap_err_with(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;

        let mut written = Vec::with_capacity(ctx.templates.len());
        for template in &ctx.templates {
            let name = template
                .file_name()
                .ok_or_else(|| eyre!("template path {} has no file name", template.display()))?;
            let source = fs::read_to_string(template)
                .wrap_err_with(|| format!("failed to read template {}", template.display()))?;
            let rendered = self
                .render_to_string(&source, bindings, ctx)
                .wrap_err_with(|| format!("failed to render template {}", template.display()))?;

            let dest = output_dir.join(name);
            fs::write(&dest, rendered)
                .wrap_err_with(|| format!("failed to write {}", dest.display()))?;
            if self.format_output {
                format_file(&dest)?;
            }
            written.push(dest);
        }
        Ok(written)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `rustfmt` over a freshly written file.
fn format_file(path: &Path) -> Result<()> {
    let status = Command::new("rustfmt")
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .status()
        .wrap_err_with(|| format!("failed to run rustfmt on {}", path.display()))?;
    if !status.success() {
        bail!("rustfmt exited with {status} on {}", path.display());
    }
    Ok(())
}
