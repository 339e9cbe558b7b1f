//! Core module - assistant logic
//!
//! Language tables, classification, knowledge search and the dispatcher.
//! Network, desktop and terminal concerns stay outside, behind the traits in
//! [`services`].

pub mod calculator;
pub mod dispatch;
pub mod intent;
pub mod knowledge;
pub mod normalize;
pub mod question;
pub mod responses;
pub mod seed;
pub mod services;
pub mod similarity;
pub mod storage;
pub mod tables;
