pub mod question;
pub mod start;
