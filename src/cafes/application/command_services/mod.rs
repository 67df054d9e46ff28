pub mod cafe_command_service_impl;
