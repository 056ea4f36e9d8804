//! Trait seams for pluggable collaborators
//!
//! The computational pipeline is pure; anything that touches the outside
//! world sits behind a trait implemented by the host.

pub mod transport;

pub use transport::{DeliveryReceipt, MessageSender};
