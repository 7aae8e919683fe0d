mod booking;
mod country;
mod course;
mod member;
mod status;
mod user;

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::country::dtos::*;
    pub use crate::course::dtos::*;
    pub use crate::member::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::country::api::*;
pub use crate::course::api::*;
pub use crate::member::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
