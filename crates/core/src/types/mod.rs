//! Core types for Marquee.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod movie;
pub mod rating;

pub use email::{Email, EmailError};
pub use id::{MovieId, UserId};
pub use movie::{FavoriteEntry, Movie, MoviePage};
pub use rating::{Rating, RatingError};
