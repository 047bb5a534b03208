//! # tandem-entity
//!
//! Domain entity models for Tandem: users with language-exchange profiles,
//! and the friend-request records connecting them.

pub mod friend_request;
pub mod user;

pub use friend_request::{FriendRequest, FriendRequestDetail, FriendRequestStatus};
pub use user::{CreateUser, OnboardingProfile, User, UserProfile, UserSummary};
