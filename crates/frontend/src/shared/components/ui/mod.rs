pub mod badge;
pub mod button;
pub mod input;
pub mod select;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use select::Select;
