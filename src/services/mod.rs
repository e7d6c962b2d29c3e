pub mod clients;
pub mod hr;
pub mod inventory;
pub mod maintenance;
pub mod notifications;
pub mod pricing;
pub mod projects;
pub mod quotations;
pub mod users;
pub mod visits;
