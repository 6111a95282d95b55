pub mod assets;
pub mod dashboard;
pub mod goals;
pub mod guard;
pub mod layout;
pub mod transactions;
