//! Core types and traits for the fiscal query agent
//!
//! This crate provides foundational types used across all other crates:
//! - Language and script definitions (Algerian language variants)
//! - Extracted fiscal entities
//! - Calculation results (VAT, IRG, general help)
//! - The query outcome envelope
//! - The outbound transport trait
//! - Error types

pub mod calculation;
pub mod entities;
pub mod envelope;
pub mod error;
pub mod language;
pub mod traits;

pub use calculation::{CalculationResult, CalculationType, VatReason, CURRENCY};
pub use entities::ExtractedEntities;
pub use envelope::{QueryFailure, QueryOutcome, QueryResponse};
pub use error::{Error, Result};
pub use language::{Language, Script};
pub use traits::{DeliveryReceipt, MessageSender};
