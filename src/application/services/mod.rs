//! Services exposing the visit read layer to callers.

pub mod visit_service;

pub use visit_service::VisitService;
