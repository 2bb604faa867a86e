//! Hand-maintained link references to external resources.
//!
//! Keys are referenced from pages as `[key]` like page slugs. Keep them
//! distinct from page slugs; a clash produces two definitions for one label.

/// External identifier to absolute URL.
pub const EXTERNAL_REFERENCES: &[(&str, &str)] = &[
    ("mkdocs", "https://www.mkdocs.org/"),
    ("mkdocs-material", "https://squidfunk.github.io/mkdocs-material/"),
    (
        "pymdownx-snippets",
        "https://facelessuser.github.io/pymdown-extensions/extensions/snippets/",
    ),
    ("mermaid", "https://mermaid.js.org/"),
    ("plotly", "https://plotly.com/javascript/"),
    ("uniswap-v3-whitepaper", "https://app.uniswap.org/whitepaper-v3.pdf"),
    (
        "commonmark-link-reference",
        "https://spec.commonmark.org/0.31.2/#link-reference-definitions",
    ),
];
