pub mod add_cafe_form_resource;
pub mod cafe_query_params_resource;
pub mod cafe_resource;
pub mod error_response_resource;
pub mod message_response_resource;
