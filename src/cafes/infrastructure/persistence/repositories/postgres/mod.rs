pub mod sqlx_cafe_repository_impl;
