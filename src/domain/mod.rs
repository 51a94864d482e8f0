pub mod customer;
pub mod errors;
pub mod locale;
pub mod ports;
pub mod rank;
pub mod redirect;
pub mod text;
pub mod view;
