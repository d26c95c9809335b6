pub mod check;
pub mod compare;
