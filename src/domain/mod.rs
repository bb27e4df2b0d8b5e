//! Domain types and the summation core.

pub mod calc;
