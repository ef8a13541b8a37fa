//! Fixed-layout PDF rendering for hotel asset-management forms.
//!
//! The crate turns a payment requisition or an equipment custody
//! ("responsiva") record into a single-page PDF with deterministic text
//! placement. Records are immutable inputs fetched elsewhere; rendering is
//! a pure function of the record, and the only side effect is the optional
//! file write performed by the `*_to_file` entry points in [`render`].

pub mod backend;
pub mod error;
pub mod format;
pub mod forms;
pub mod layout;
pub mod record;
pub mod render;
pub mod text;
