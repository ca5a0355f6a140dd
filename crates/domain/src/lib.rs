//! Domain layer for the customer-records service.
//!
//! This crate provides the customer workflows and their collaborators:
//! - CustomerService orchestrating create, retrieve, update, and remove
//! - RequestValidator for create-request validation
//! - IdentityProvider for identifier generation
//! - Application assemblies wiring a service to a backend

pub mod app;
pub mod error;
pub mod identity;
pub mod request;
pub mod service;
pub mod validate;

pub use error::DomainError;
pub use identity::{FixedIdentity, IdentityProvider, UuidIdentity};
pub use request::{CreateRequest, UpdateRequest};
pub use service::CustomerService;
pub use validate::{FieldViolation, RequestValidator, ValidationFailure};
