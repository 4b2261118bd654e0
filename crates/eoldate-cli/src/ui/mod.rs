pub mod picker;

pub use picker::pick_product;
