//! Integration tests rendering the shipped template against a small
//! binding set.

use chrono::TimeZone;
use nvgen_codegen::{GenerationContext, Renderer};
use nvgen_core::{BindingSet, build_bindings};
use nvgen_manifest::{ApiManifest, ExtTypeDecl, FunctionDecl, ParameterDecl};

const NEOVIM_API_TEMPLATE: &str = include_str!("../../templates/neovim_api.rs");

fn decl(name: &str, return_type: &str, params: &[(&str, &str)]) -> FunctionDecl {
    FunctionDecl {
        name: name.to_string(),
        return_type: return_type.to_string(),
        parameters: params
            .iter()
            .map(|(ty, name)| ParameterDecl {
                api_type: ty.to_string(),
                name: name.to_string(),
            })
            .collect(),
        can_fail: false,
    }
}

fn sample_bindings() -> BindingSet {
    let manifest = ApiManifest {
        functions: vec![
            decl("vim_command", "void", &[("String", "command")]),
            decl(
                "buffer_get_line",
                "String",
                &[("Buffer", "buffer"), ("Integer", "index")],
            ),
            decl("window_get_buffer", "Buffer", &[("Window", "window")]),
        ],
        types: [
            ("Buffer".to_string(), ExtTypeDecl { id: 0 }),
            ("Window".to_string(), ExtTypeDecl { id: 1 }),
            ("Tabpage".to_string(), ExtTypeDecl { id: 2 }),
        ]
        .into_iter()
        .collect(),
        error_types: Default::default(),
        unknown_keys: Vec::new(),
    };
    build_bindings(&manifest)
}

fn fixed_context(templates: Vec<std::path::PathBuf>) -> GenerationContext {
    GenerationContext {
        templates,
        timestamp: chrono::Local.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap(),
        host: "nvim".to_string(),
    }
}

#[test]
fn renders_extension_type_structs() {
    let rendered = Renderer::without_formatting()
        .render_to_string(NEOVIM_API_TEMPLATE, &sample_bindings(), &fixed_context(vec![]))
        .unwrap();

    for typename in ["Buffer", "Window", "Tabpage"] {
        assert!(rendered.contains(&format!("pub struct {typename} {{")));
        assert!(rendered.contains(&format!("impl FromVal<Value> for {typename}")));
    }
}

#[test]
fn renders_instance_methods_with_stripped_names() {
    let rendered = Renderer::without_formatting()
        .render_to_string(NEOVIM_API_TEMPLATE, &sample_bindings(), &fixed_context(vec![]))
        .unwrap();

    // buffer_get_line becomes Buffer::get_line with the receiver dropped.
    assert!(rendered.contains("pub fn get_line(&self, neovim: &mut Neovim, index: u64)"));
    assert!(rendered.contains("neovim.session.call(\"buffer_get_line\""));
    // window_get_buffer has only the receiver, so no extra arguments.
    assert!(rendered.contains("pub fn get_buffer(&self, neovim: &mut Neovim, )"));
}

#[test]
fn renders_global_functions_on_the_api_trait() {
    let rendered = Renderer::without_formatting()
        .render_to_string(NEOVIM_API_TEMPLATE, &sample_bindings(), &fixed_context(vec![]))
        .unwrap();

    assert!(rendered.contains("pub trait NeovimApi {"));
    assert!(
        rendered.contains("fn command(&mut self, command: &str) -> Result<(), CallError>;")
    );
    assert!(rendered.contains("impl NeovimApi for Neovim {"));
}

#[test]
fn stamps_the_generation_date() {
    let rendered = Renderer::without_formatting()
        .render_to_string(NEOVIM_API_TEMPLATE, &sample_bindings(), &fixed_context(vec![]))
        .unwrap();

    assert!(rendered.starts_with("// Auto generated 2026-01-02 12:00:00"));
}

#[test]
fn generate_writes_one_file_per_template() {
    let template_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        template_dir.path().join("neovim_api.rs"),
        NEOVIM_API_TEMPLATE,
    )
    .unwrap();

    let output_dir = tempfile::tempdir().unwrap();
    let output = output_dir.path().join("generated");

    let ctx = fixed_context(vec![template_dir.path().join("neovim_api.rs")]);
    let written = Renderer::without_formatting()
        .generate(&ctx, &sample_bindings(), &output)
        .unwrap();

    assert_eq!(written, vec![output.join("neovim_api.rs")]);
    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert!(content.contains("pub struct Buffer"));
}

#[test]
fn generate_fails_on_unreadable_template() {
    let output_dir = tempfile::tempdir().unwrap();
    let ctx = fixed_context(vec!["does/not/exist.rs".into()]);

    let err = Renderer::without_formatting()
        .generate(&ctx, &sample_bindings(), output_dir.path())
        .unwrap_err();
    assert!(err.to_string().contains("exist.rs"));
}
