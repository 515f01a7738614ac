pub mod lookup;
pub mod menu;
