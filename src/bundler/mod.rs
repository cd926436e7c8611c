//! Bundle rule fragments into one instruction document
//!
//! Pipeline: discover fragments → order them → per fragment strip frontmatter
//! and the embedded header → write `## <Title>` plus body. The general
//! fragment is written first and untitled. Fragments that are empty after
//! stripping are left out entirely.

pub mod writer;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::common::string_utils::filename_to_header;
use crate::config::SectionCatalog;
use crate::error::{self, Result};
use crate::fragment::{self, Fragment, FragmentSet, Mode};
use crate::markdown;

pub use writer::BundleWriter;

/// Counts reported after a bundle run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Section title for a fragment identifier
///
/// Catalog sections keep their configured casing; other identifiers are
/// title-cased word by word.
pub fn title_for(id: &str, catalog: &SectionCatalog) -> String {
    catalog
        .find_by_id(id)
        .map_or_else(|| filename_to_header(id), |section| section.name.clone())
}

fn emit<W: std::io::Write>(
    writer: &mut BundleWriter<W>,
    fragment: &Fragment,
    title: Option<&str>,
    summary: &mut BundleSummary,
) -> Result<()> {
    let raw = fragment.read()?;
    if let Some(meta) = markdown::frontmatter::read_meta(&raw) {
        tracing::debug!(
            "fragment '{}': description={:?} applyTo={:?} alwaysApply={:?}",
            fragment.id,
            meta.description,
            meta.apply_to,
            meta.always_apply
        );
    }
    let body = markdown::fragment_body(&raw);
    if body.is_empty() {
        tracing::debug!("skipping empty fragment '{}'", fragment.id);
        summary.skipped += 1;
        return Ok(());
    }
    tracing::debug!("writing fragment '{}'", fragment.id);
    writer.write_section(title, &body)?;
    summary.written += 1;
    Ok(())
}

/// Write an already discovered fragment set to `writer`
pub fn write_bundle<W: std::io::Write>(
    set: FragmentSet,
    catalog: &SectionCatalog,
    writer: &mut BundleWriter<W>,
) -> Result<BundleSummary> {
    let mut summary = BundleSummary::default();

    if let Some(general) = &set.general {
        emit(writer, general, None, &mut summary)?;
    }

    for fragment in fragment::order_fragments(set.others, catalog) {
        let title = title_for(&fragment.id, catalog);
        emit(writer, &fragment, Some(&title), &mut summary)?;
    }

    writer.flush()?;
    Ok(summary)
}

/// Bundle the fragments of `mode` under `root` into `output`, overwriting it
pub fn bundle(
    root: &Path,
    mode: Mode,
    catalog: &SectionCatalog,
    output: &Path,
) -> Result<BundleSummary> {
    let set = fragment::discover(root, mode)?;

    let file = File::create(output).map_err(|e| error::fs::write_failed(output, &e))?;
    let mut writer = BundleWriter::new(BufWriter::new(file), output);

    let summary = write_bundle(set, catalog, &mut writer)?;
    tracing::debug!(
        "bundled {} fragments ({} empty) into {}",
        summary.written,
        summary.skipped,
        output.display()
    );
    Ok(summary)
}
