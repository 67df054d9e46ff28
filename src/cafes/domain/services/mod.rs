pub mod cafe_command_service;
pub mod cafe_query_service;
