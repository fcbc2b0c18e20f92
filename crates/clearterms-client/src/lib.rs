//! # ClearTerms Client
//!
//! HTTP access to the policy analysis backend.
//!
//! Provides the `AnalysisClient` (an implementation of
//! `clearterms_core::PolicyAnalyzer`) and its environment-driven configuration.

pub mod client;
pub mod config;

pub use client::AnalysisClient;
pub use config::ClientConfig;
