pub mod assets;
pub mod dashboard;
pub mod goals;
pub mod login;
pub mod profile;
pub mod signup;
pub mod transactions;
