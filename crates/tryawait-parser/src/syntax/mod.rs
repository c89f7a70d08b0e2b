//! Syntax utilities shared by transforms.

pub mod transform_utils;
