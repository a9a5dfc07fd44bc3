pub mod controller;
pub mod endpoint;
pub mod publisher;
pub mod reading;
