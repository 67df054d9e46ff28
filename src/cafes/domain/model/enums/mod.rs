pub mod cafe_domain_error;
