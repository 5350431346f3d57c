//! Data Transfer Objects for REST request/response serialization.
//!
//! Every route has a typed request DTO; acknowledgement responses share
//! the [`Ack`] envelope, which echoes the validated request back in the
//! `data` field.

pub mod action_dto;
pub mod common_dto;
pub mod inventory_dto;
pub mod nav_dto;
pub mod world_dto;

pub use action_dto::*;
pub use common_dto::*;
pub use inventory_dto::*;
pub use nav_dto::*;
pub use world_dto::*;
