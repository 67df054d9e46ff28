pub mod cafe_query_service_impl;
