mod save_button;
mod select;

pub use save_button::SaveSearchButton;
pub use select::SaveSearchSelect;
