// src/output/mod.rs
//! Output delivery: plan construction, execution, reporting.

mod clipboard;
mod types;
mod writer;

pub use types::{
    CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::deliver;
