//! Friend-relationship workflow.

pub mod service;

pub use service::FriendService;
