//! Core library for leadless
//!
//! This crate implements the **Functional Core** of the leadless application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The leadless project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`leadless_core`** (this crate): Pure transformation functions with zero I/O
//! - **`leadless`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`pagination`]: Page-window planning for the tracker's offset-paginated search
//! - [`jira`]: Wire models, response-shape validation, JQL construction, and the
//!   unled-component aggregation
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use leadless_core::jira::{count_issues, without_lead, parse_component_list};
//!
//! // Parse fixture data (no HTTP required)
//! let components = parse_component_list(r#"[{"id": "1", "name": "API"}]"#)?;
//!
//! // Transform using pure functions
//! let unled = without_lead(components);
//! let report = count_issues(&unled, &[]);
//!
//! // Assert on results (no mocking needed)
//! assert_eq!(report.components.len(), 1);
//! ```

pub mod jira;
pub mod pagination;
