pub mod class_service;
pub mod payment_service;
pub mod selection_service;
pub mod token_service;
pub mod user_service;
