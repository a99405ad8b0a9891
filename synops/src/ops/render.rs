//! Render operation - synopsis generation.

use eyre::{Result, bail};
use synops_codegen::{
    CodeGenerator, FilterGenerator, HtmlGenerator, Indent, SynopsisFilter, TextGenerator,
    generate_code,
};
use synops_manifest::{Format, IndentSetting, KIND_NAMES, Manifest, RenderOptions};

/// Render the manifest's file with the given options.
pub fn render(manifest: &Manifest, options: &RenderOptions) -> Result<String> {
    if let Some(kind) = options
        .exclude_kinds
        .iter()
        .find(|kind| !KIND_NAMES.contains(&kind.as_str()))
    {
        bail!(
            "unknown entity kind '{kind}', expected one of: {}",
            KIND_NAMES.join(", ")
        );
    }

    let filter = build_filter(options);
    let indent = indent(options.indent);
    tracing::debug!(format = %options.format, %indent, "rendering {}", manifest.file.name);

    let output = match options.format {
        Format::Text => run(TextGenerator::new(indent), filter, manifest).finish(),
        Format::Html => run(HtmlGenerator::new(indent), filter, manifest).finish(),
    };
    Ok(output)
}

fn run<G: CodeGenerator>(generator: G, filter: SynopsisFilter, manifest: &Manifest) -> G {
    let mut generator = FilterGenerator::new(generator, filter);
    generate_code(&mut generator, &manifest.file);
    generator.into_inner()
}

fn build_filter(options: &RenderOptions) -> SynopsisFilter {
    let filter = options
        .exclude
        .iter()
        .fold(SynopsisFilter::new(), |filter, id| filter.exclude(id.clone()));
    let filter = options
        .declarations
        .iter()
        .fold(filter, |filter, id| filter.declaration_only(id.clone()));
    options
        .exclude_kinds
        .iter()
        .fold(filter, |filter, kind| filter.exclude_kind(kind.as_str()))
}

fn indent(setting: IndentSetting) -> Indent {
    match setting {
        IndentSetting::Spaces(n) => Indent::Spaces(n),
        IndentSetting::Tab => Indent::Tab,
    }
}

/// The manifest setting equivalent to a command line indentation.
pub fn indent_setting(indent: Indent) -> IndentSetting {
    match indent {
        Indent::Spaces(n) => IndentSetting::Spaces(n),
        Indent::Tab => IndentSetting::Tab,
    }
}
