pub mod create_cafe_command;
pub mod delete_cafe_command;
pub mod update_cafe_price_command;
