#![allow(non_snake_case)]

pub mod bridge;
pub mod request;

pub use bridge::*;
pub use request::*;
