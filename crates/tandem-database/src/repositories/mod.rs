//! Repository implementations.

pub mod friend_request;
pub mod user;

pub use friend_request::FriendRequestRepository;
pub use user::UserRepository;
