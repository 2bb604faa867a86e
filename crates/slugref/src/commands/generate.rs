//! Link-reference generation command.

use std::path::{Path, PathBuf};

use clap::Args;
use slugref_config::{CONFIG_FILENAME, SiteConfig};
use slugref_pages::scan_pages;
use slugref_refs::{
    EXTERNAL_REFERENCES, LINK_REFS_FILENAME, OVERVIEW_FILENAME, ReferenceTable, inject_includes,
    write_link_refs, write_overview,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to the MkDocs configuration file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    config: PathBuf,

    /// Enable verbose output (log every written file and injected page).
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not append the include directive to pages.
    #[arg(long)]
    no_inject: bool,
}

/// What a generation run produced.
#[derive(Debug)]
pub(crate) struct Summary {
    /// Rows written to the overview table.
    pub entries: usize,
    /// Link-reference definitions written.
    pub references: usize,
    /// Pages that received the include directive.
    pub injected: usize,
    pub overview_path: PathBuf,
    pub link_refs_path: PathBuf,
}

impl GenerateArgs {
    /// Execute the generate command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let summary = run(&self.config, !self.no_inject)?;

        output.info(&format!(
            "Wrote {} entries to {}",
            summary.entries,
            summary.overview_path.display()
        ));
        output.info(&format!(
            "Wrote {} link refs to {}",
            summary.references,
            summary.link_refs_path.display()
        ));
        output.success(&format!(
            "Injected include line into {} files",
            summary.injected
        ));
        Ok(())
    }
}

/// Load the configuration, scan pages, write both outputs and inject includes.
///
/// Nothing is written when the configuration cannot be loaded.
pub(crate) fn run(config_path: &Path, inject: bool) -> Result<Summary, CliError> {
    let config = SiteConfig::load(config_path)?;
    let docs_dir = config.docs_path();

    let paths = config.nav_paths();
    tracing::info!(page_count = paths.len(), docs_dir = %docs_dir.display(), "Scanning pages");
    let entries = scan_pages(&docs_dir, &paths);

    let table = ReferenceTable::build(&entries, EXTERNAL_REFERENCES);

    let overview_path = config.config_dir().join(OVERVIEW_FILENAME);
    let link_refs_path = docs_dir.join(LINK_REFS_FILENAME);
    write_overview(&overview_path, &table)?;
    write_link_refs(&link_refs_path, &table)?;

    let injected = if inject {
        inject_includes(&entries, &link_refs_path)
    } else {
        0
    };

    Ok(Summary {
        entries: table.rows.len(),
        references: table.reference_count(),
        injected,
        overview_path,
        link_refs_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use pretty_assertions::assert_eq;
    use slugref_config::ConfigError;
    use slugref_refs::INCLUDE_DIRECTIVE;

    const MKDOCS_YML: &str = r"
site_name: Protocol Docs
markdown_extensions:
  - pymdownx.superfences:
      custom_fences:
        - name: mermaid
          class: mermaid
          format: !!python/name:mermaid2.fence_mermaid
nav:
  - Home: index.md
  - Concepts:
      - Liquidity: concepts/liquidity.md
      - Missing: concepts/missing.md
  - Plain: plain.md
  - Home again: index.md
";

    fn create_site() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let docs = root.join("docs");
        fs::create_dir_all(docs.join("concepts")).unwrap();

        fs::write(root.join("mkdocs.yml"), MKDOCS_YML).unwrap();
        fs::write(
            docs.join("index.md"),
            "---\ntitle: Home\nslug: home\n---\n# Welcome\n",
        )
        .unwrap();
        fs::write(
            docs.join("concepts/liquidity.md"),
            "---\ntitle: Position & Liquidity\nslug: liquidity\n---\n\n## Ranges\n\n## Fee Tiers\n",
        )
        .unwrap();
        fs::write(docs.join("plain.md"), "# Plain page\n").unwrap();
        temp_dir
    }

    #[test]
    fn test_full_run() {
        let temp_dir = create_site();
        let root = temp_dir.path();

        let summary = run(&root.join("mkdocs.yml"), true).unwrap();

        assert_eq!(summary.entries, 4);
        assert_eq!(summary.references, 2 + 3 + EXTERNAL_REFERENCES.len());
        assert_eq!(summary.injected, 3);

        let overview = fs::read_to_string(root.join("slugs.md")).unwrap();
        assert_eq!(
            overview,
            "\
# Slugs

| Path | Title | Slug |
| --- | --- | --- |
| `index.md` | Home | `home` |
| `concepts/liquidity.md` | Position & Liquidity | `liquidity` |
| `concepts/missing.md` |  | `` |
| `plain.md` |  | `` |
"
        );

        let link_refs = fs::read_to_string(root.join("docs/link-refs.md")).unwrap();
        assert!(link_refs.starts_with(
            "\
[home]: /
[liquidity]: /concepts/liquidity

[home#welcome]: /#welcome
[liquidity#fee-tiers]: /concepts/liquidity#fee-tiers
[liquidity#ranges]: /concepts/liquidity#ranges

"
        ));
        assert!(link_refs.contains("[mkdocs]: https://www.mkdocs.org/\n"));

        let plain = fs::read_to_string(root.join("docs/plain.md")).unwrap();
        assert_eq!(plain, format!("# Plain page\n\n{INCLUDE_DIRECTIVE}\n"));
        assert!(!root.join("docs/concepts/missing.md").exists());
    }

    #[test]
    fn test_second_run_injects_nothing() {
        let temp_dir = create_site();
        let config = temp_dir.path().join("mkdocs.yml");

        run(&config, true).unwrap();
        let index_after_first = fs::read(temp_dir.path().join("docs/index.md")).unwrap();

        let summary = run(&config, true).unwrap();
        assert_eq!(summary.injected, 0);
        assert_eq!(
            fs::read(temp_dir.path().join("docs/index.md")).unwrap(),
            index_after_first
        );
    }

    #[test]
    fn test_no_inject_leaves_pages_untouched() {
        let temp_dir = create_site();
        let summary = run(&temp_dir.path().join("mkdocs.yml"), false).unwrap();

        assert_eq!(summary.injected, 0);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("docs/plain.md")).unwrap(),
            "# Plain page\n"
        );
    }

    #[test]
    fn test_unreadable_page_does_not_abort_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let docs = root.join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(root.join("mkdocs.yml"), "nav:\n  - bad.md\n  - good.md\n").unwrap();
        fs::write(docs.join("bad.md"), b"# Caf\xe9\n").unwrap();
        fs::write(docs.join("good.md"), "---\nslug: good\n---\n# Good\n").unwrap();

        let summary = run(&root.join("mkdocs.yml"), true).unwrap();

        assert_eq!(summary.entries, 2);
        assert_eq!(summary.injected, 1);
        assert_eq!(
            fs::read_to_string(docs.join("good.md")).unwrap(),
            format!("---\nslug: good\n---\n# Good\n\n{INCLUDE_DIRECTIVE}\n")
        );
        let link_refs = fs::read_to_string(docs.join("link-refs.md")).unwrap();
        assert!(link_refs.starts_with("[good]: /good\n\n[good#good]: /good#good\n"));
    }

    #[test]
    fn test_missing_config_leaves_outputs_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("slugs.md"), "previous overview\n").unwrap();
        fs::write(root.join("docs/link-refs.md"), "[old]: /old\n").unwrap();

        let result = run(&root.join("mkdocs.yml"), true);

        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::NotFound(_)))
        ));
        assert_eq!(
            fs::read_to_string(root.join("slugs.md")).unwrap(),
            "previous overview\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("docs/link-refs.md")).unwrap(),
            "[old]: /old\n"
        );
    }
}
