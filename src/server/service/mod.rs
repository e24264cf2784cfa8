//! Business logic between controllers and repositories.
//!
//! Services validate request DTOs, run multi-row writes inside transactions and assemble
//! response DTOs from repository models. The view, timeline and tracker modules hold the
//! pure derivations behind the read-only endpoints.

pub mod acquisition;
pub mod auth;
pub mod roadmap;
