mod endpoint_tests;
mod value_object_tests;
