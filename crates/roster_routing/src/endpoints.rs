pub mod content_endpoints;
pub mod home_endpoints;
pub mod players_endpoints;
