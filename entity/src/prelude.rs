pub use super::auction_bidding_history::Entity as AuctionBiddingHistory;
pub use super::auction_winner::Entity as AuctionWinner;
pub use super::payment::Entity as Payment;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::product_message::Entity as ProductMessage;
pub use super::user::Entity as User;
