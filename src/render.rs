//! Public rendering entry points.
//!
//! Each entry point validates the record, composes its layout, and paints
//! it. The `*_to_file` variants persist the PDF under a deterministic,
//! unique name (`Requisicion_<token>_<millis>.pdf` /
//! `Responsiva_<token>_<millis>.pdf`); the `*_preview` variants hand the
//! bytes back for inline display and never touch the filesystem.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use log::info;

use crate::backend::{self, RenderedDocument};
use crate::error::DocError;
use crate::forms;
use crate::record::{CustodyRecord, RequisitionRecord};

/// Filename prefix for requisition downloads.
pub const REQUISITION_PREFIX: &str = "Requisicion";
/// Filename prefix for custody-letter downloads.
pub const CUSTODY_PREFIX: &str = "Responsiva";

/// Last issued filename timestamp. Wall-clock millis alone can repeat when
/// two renders land in the same tick; bumping past the previous value keeps
/// the `<millis>` component strictly increasing in-process.
static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Renders a requisition and writes it into `dir`; returns the file path.
pub fn requisition_to_file(
    record: &RequisitionRecord,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, DocError> {
    record.validate()?;
    let rendered = backend::paint(&forms::requisition_layout(record)?)?;
    persist(rendered, dir.as_ref(), REQUISITION_PREFIX, &record.filename_token())
}

/// Renders a requisition for inline preview; the caller owns the handle.
pub fn requisition_preview(record: &RequisitionRecord) -> Result<RenderedDocument, DocError> {
    record.validate()?;
    backend::paint(&forms::requisition_layout(record)?)
}

/// Renders a custody letter and writes it into `dir`; returns the file path.
pub fn custody_to_file(
    record: &CustodyRecord,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, DocError> {
    record.validate()?;
    let rendered = backend::paint(&forms::custody_layout(record)?)?;
    persist(rendered, dir.as_ref(), CUSTODY_PREFIX, &record.filename_token())
}

/// Renders a custody letter for inline preview; the caller owns the handle.
pub fn custody_preview(record: &CustodyRecord) -> Result<RenderedDocument, DocError> {
    record.validate()?;
    backend::paint(&forms::custody_layout(record)?)
}

/// Derives the download filename for the given prefix and token.
pub fn filename(prefix: &str, token: &str) -> String {
    format!("{prefix}_{token}_{}.pdf", unique_stamp())
}

fn persist(
    rendered: RenderedDocument,
    dir: &Path,
    prefix: &str,
    token: &str,
) -> Result<PathBuf, DocError> {
    let path = dir.join(filename(prefix, token));
    std::fs::write(&path, &rendered.bytes)?;
    info!("wrote {} ({} bytes)", path.display(), rendered.len());
    Ok(path)
}

/// Returns a strictly increasing millisecond timestamp.
fn unique_stamp() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_STAMP.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}
