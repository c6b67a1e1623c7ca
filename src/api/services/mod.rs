pub mod character_service;
pub mod command_service;
pub mod keyword_service;
pub mod link_service;
pub mod trend_service;

pub use character_service::*;
pub use command_service::*;
pub use keyword_service::*;
pub use link_service::*;
pub use trend_service::*;
