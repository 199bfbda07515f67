#![allow(dead_code)]

pub mod shape;
pub mod source_fixtures;
