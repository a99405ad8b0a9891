//! Snapshot tests for rendered synopses.
//!
//! These tests verify that rendered manifests match the expected text.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use synops_codegen::{
    FilterGenerator, HtmlGenerator, Indent, SynopsisFilter, TextGenerator, generate_code,
};
use synops_manifest::parse_str;

const GEOMETRY: &str = r#"
[file]
name = "geometry.hpp"

[[file.entities]]
kind = "include"
target = "cstddef"
system = true

[[file.entities]]
kind = "macro"
name = "GEO_VERSION"
replacement = "3"

[[file.entities]]
kind = "namespace"
name = "geo"

[[file.entities.children]]
kind = "class"
keyword = "struct"
name = "point"
children = [
    { kind = "field", name = "x", type = { builtin = "double" }, default = 0.0 },
    { kind = "field", name = "y", type = { builtin = "double" }, default = 0.0 },
]

[[file.entities.children]]
kind = "enum"
name = "axis"
scoped = true
underlying = { builtin = "unsigned char" }
children = [
    { kind = "enumerator", name = "x" },
    { kind = "enumerator", name = "y", value = 4 },
]

[[file.entities.children]]
kind = "class"
name = "shape"
children = [
    { kind = "access", access = "public" },
    { kind = "function", name = "~shape", virtual = true, body = "default" },
    { kind = "function", name = "area", returns = { builtin = "double" }, virtual = true, const = true, body = "pure" },
    { kind = "access", access = "protected" },
    { kind = "field", name = "id_", type = { builtin = "int" }, mutable = true },
]

[[file.entities.children]]
kind = "class"
name = "circle"
final = true
bases = [{ type = { ref = "geo::shape" }, access = "public" }]
children = [
    { kind = "access", access = "public" },
    { kind = "function", name = "circle", explicit = true, params = [{ name = "r", type = { builtin = "double" } }] },
    { kind = "function", name = "area", returns = { builtin = "double" }, const = true, override = true, body = ["return 3.14 * r_ * r_;"] },
    { kind = "access", access = "private" },
    { kind = "field", name = "r_", type = { builtin = "double" } },
]

[[file.entities.children]]
kind = "function"
name = "distance"
returns = { builtin = "double" }
noexcept = true
params = [
    { name = "a", type = { const = { lvalue_ref = { ref = "geo::point" } } } },
    { name = "b", type = { const = { lvalue_ref = { ref = "geo::point" } } } },
]

[[file.entities.children]]
kind = "alias"
name = "points"
type = { instantiation = { template = { ref = "std::vector", name = "std::vector" }, args = [{ type = { ref = "geo::point" } }] } }
"#;

const CONTAINERS: &str = r#"
[file]
name = "containers.hpp"

[[file.entities]]
kind = "class"
keyword = "struct"
name = "array"
template = [
    { kind = "type", name = "T" },
    { kind = "non_type", name = "N", type = "std::size_t" },
]
children = [
    { kind = "field", name = "data", type = { array = { of = "T", size = "N" } } },
    { kind = "function", name = "size", returns = "std::size_t", constexpr = true, const = true, noexcept = true, body = ["return N;"] },
]

[[file.entities]]
kind = "class"
keyword = "struct"
name = "array"
id = "array<bool, 0>"
specialization = { template = { ref = "array" }, args = [{ type = { builtin = "bool" } }, { expr = 0 }] }
children = [
    { kind = "function", name = "size", returns = "std::size_t", constexpr = true, const = true, noexcept = true, body = ["return 0;"] },
]

[[file.entities]]
kind = "alias"
name = "bytes"
template = [{ kind = "non_type", name = "N", type = "std::size_t" }]
type = { instantiation = { template = { ref = "array" }, args = [{ type = "unsigned char" }, { expr = "N" }] } }

[[file.entities]]
kind = "function"
name = "fill"
template = [{ kind = "type", name = "T" }, { kind = "type", name = "Args", variadic = true }]
returns = { builtin = "void" }
params = [
    { name = "out", type = { pointer = "T" } },
    { name = "args", type = { rvalue_ref = "Args" }, pack = true },
]
"#;

/// Render the file of a manifest as plain text.
fn render(manifest: &str, filter: SynopsisFilter) -> String {
    let manifest = parse_str(manifest).expect("Failed to parse manifest");
    let mut generator = FilterGenerator::new(TextGenerator::default(), filter);
    generate_code(&mut generator, &manifest.file);
    generator.into_inner().finish()
}

#[test]
fn test_geometry_text() {
    let output = render(GEOMETRY, SynopsisFilter::new());
    insta::assert_snapshot!("geometry_text", output);
}

#[test]
fn test_geometry_filtered() {
    let filter = SynopsisFilter::new()
        .exclude("geo::shape")
        .declaration_only("geo::circle")
        .exclude_kind("macro");
    let output = render(GEOMETRY, filter);
    insta::assert_snapshot!("geometry_filtered", output);
}

#[test]
fn test_templates_text() {
    let output = render(CONTAINERS, SynopsisFilter::new());
    insta::assert_snapshot!("templates_text", output);
}

#[test]
fn test_tab_indentation() {
    let manifest = parse_str(GEOMETRY).unwrap();
    let point = manifest.find(&"geo::point".into()).unwrap();
    let mut generator = TextGenerator::new(Indent::Tab);
    generate_code(&mut generator, point);
    assert_eq!(
        generator.finish(),
        "struct point {\n\tdouble x = 0.0;\n\tdouble y = 0.0;\n};\n"
    );
}

#[test]
fn test_declaration_only_namespace() {
    let output = render(GEOMETRY, SynopsisFilter::new().declaration_only("geo"));
    assert_eq!(
        output,
        "#include <cstddef>\n#define GEO_VERSION 3\nnamespace geo {}\n"
    );
}

#[test]
fn test_html_links_references() {
    let manifest = parse_str(GEOMETRY).unwrap();
    let distance = manifest.find(&"geo::distance".into()).unwrap();
    let mut generator = HtmlGenerator::new(Indent::default());
    generate_code(&mut generator, distance);
    let html = generator.finish();
    assert!(html.starts_with("<pre><code class=\"language-cpp\"><a id=\"geo::distance\"></a>"));
    assert_eq!(html.matches("href=\"#geo::point\"").count(), 2);
    assert!(html.contains("<span class=\"identifier\">distance</span>"));
}
