//! Database entities for the Foodoo API service.

pub mod order_items;
pub mod orders;
pub mod users;
