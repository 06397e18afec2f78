#![allow(dead_code)]

pub mod heartcheck_env;
pub mod stub_backend;
