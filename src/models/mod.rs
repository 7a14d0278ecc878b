pub mod item;
pub mod price;
