//! Request and response DTOs

pub mod auth_dto;
pub mod consignment_dto;
