pub mod cafe_repository;
pub mod postgres;
