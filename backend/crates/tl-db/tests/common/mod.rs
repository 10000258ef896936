#![allow(unused_imports)]

pub(crate) mod test_db;

pub use test_db::*;
