//! HTTP request handlers.
//!
//! Controllers extract path, query and body data, convert DTOs into domain params, call the
//! matching service and wrap the result in the `ApiResponse` envelope. Access control runs
//! before any handler, in the `require_access` middleware attached by the router.

pub mod auction_winner;
pub mod auth;
pub mod bid;
pub mod category;
pub mod message;
pub mod payment;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
