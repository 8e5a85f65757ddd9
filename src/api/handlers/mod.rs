pub mod health;
pub mod list;
pub mod upload;


pub use health::health_handler;
pub use list::list_handler;
pub use upload::upload_handler;
