pub mod product_picker;

pub use product_picker::{PickerAction, ProductPicker};
