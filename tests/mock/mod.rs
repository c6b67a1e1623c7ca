pub mod game_api_mock;

pub use game_api_mock::*;
