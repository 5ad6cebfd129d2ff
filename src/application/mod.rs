// Application layer - Use cases and the repository seam
pub mod catalog_service;
pub mod chart_service;
pub mod dataset_repository;
pub mod filtering;
pub mod summary_service;
