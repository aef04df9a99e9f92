//! Cabling reconciliation primitives: link model, topology loading, and the
//! intended-versus-observed matcher used by higher-level tools.

pub mod format;
pub mod loader;
pub mod model;
pub mod reconcile;

pub use format::{format_json, format_summary, format_text, TextOptions};
pub use loader::{
    load_document, load_document_with_options, parse_document, parse_document_with_options,
    parse_link_list, DocumentFormat, LoadError, LoadOptions, RecordLocation, DEFAULT_ROOT_KEY,
};
pub use model::{LinkRecord, TopologyDocument};
pub use reconcile::{
    reconcile, reconcile_device, reconcile_with_options, Diagnostic, LinkStatus,
    ReconcileError, ReconcileOptions, Report, UndocumentedPlacement,
};
