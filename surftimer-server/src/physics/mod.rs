pub mod bounding_box;
