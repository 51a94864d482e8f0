pub mod customer_view_repo;
pub mod links;
pub mod localization;
pub mod memory;
pub mod models;
pub mod tab_repo;
