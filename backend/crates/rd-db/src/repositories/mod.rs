pub mod account_repository;
pub mod identity_repository;
