pub mod confirmation;
pub mod filter;
pub mod pan;
pub mod scroll;

pub use confirmation::ConfirmationGate;
pub use filter::CategoryFilter;
pub use pan::{Offset, PanState};
pub use scroll::{anchor_selector, scroll_target};
