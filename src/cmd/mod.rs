pub mod batch;
pub mod check;
pub mod profiles;
pub mod score;
