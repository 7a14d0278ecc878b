pub mod item_line;
