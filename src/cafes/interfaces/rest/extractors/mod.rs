pub mod add_cafe_form_extractor;
