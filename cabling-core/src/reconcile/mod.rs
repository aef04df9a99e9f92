//! Intended-versus-observed cabling reconciliation.

pub mod engine;
pub mod result;

pub use engine::{
    reconcile, reconcile_device, reconcile_with_options, ReconcileError, ReconcileOptions,
    UndocumentedPlacement,
};
pub use result::{Diagnostic, LinkStatus, Report};
