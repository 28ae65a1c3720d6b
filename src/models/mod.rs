//! Curator API model types.

mod image;
mod tag;
mod user;

pub use image::*;
pub use tag::*;
pub use user::*;
