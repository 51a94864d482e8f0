pub mod customer_view_service;
pub mod redirect_service;
