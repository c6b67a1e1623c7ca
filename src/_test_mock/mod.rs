pub mod game_api_mock;
