//! tfdoc - Terraform state documenter
//!
//! A library for rendering Terraform state snapshots as static HTML reports.

pub mod cli;
pub mod error;
pub mod render;
pub mod report;
pub mod terraform;

pub use error::TfdocError;
pub use terraform::{AttributeValue, Instance, Resource, StateDocument};
