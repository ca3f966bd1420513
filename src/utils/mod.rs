// src/utils/mod.rs

pub mod html;
pub mod pagination;
pub mod random;
