pub mod client;
pub mod custody_entry;
pub mod employee;
pub mod inventory_item;
pub mod maintenance_request;
pub mod maintenance_status_log;
pub mod notification;
pub mod product_type;
pub mod project;
pub mod project_attachment;
pub mod quotation;
pub mod quotation_item;
pub mod sales_visit;
pub mod user;
