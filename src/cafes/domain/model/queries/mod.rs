pub mod search_cafes_by_location_query;
