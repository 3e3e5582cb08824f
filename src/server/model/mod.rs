//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and turned
//! into DTOs at the controller boundary. `*Detail` types carry an entity together with its
//! expanded relations; `*Params` types carry validated input for create and update calls.

pub mod auction_winner;
pub mod auth;
pub mod bid;
pub mod category;
pub mod message;
pub mod page;
pub mod payment;
pub mod product;
pub mod user;
