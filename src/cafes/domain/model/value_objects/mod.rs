pub mod cafe_id;
pub mod truthy_flag;
