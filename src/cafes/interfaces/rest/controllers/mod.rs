pub mod cafe_rest_controller;
