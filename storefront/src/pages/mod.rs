//! One module per route.

pub mod admin;
pub mod category;
pub mod faq;
pub mod home;
pub mod review;
pub mod shop;
