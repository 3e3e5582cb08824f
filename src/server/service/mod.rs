//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They turn repository
//! results into `AppError`s, run the multi-step operations (bidding, sign-in, token
//! refresh) and publish real-time events once data is committed.

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
