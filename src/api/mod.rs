//! HTTP surface: generic resource handlers, the error body DTO, middleware
//! and the router that ties them together.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
