//! SAP SuccessFactors outbound adapters.
//!
//! This module provides the OData HTTP implementation of the `HrDirectory`
//! port.

mod client;
mod dto;

pub use client::{SuccessFactorsCredentials, SuccessFactorsDirectory};
