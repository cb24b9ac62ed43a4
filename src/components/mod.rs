pub mod menu_filter;
pub mod pan_viewport;
pub mod reservation_form;
pub mod reservation_modal;
pub mod smooth_scroll;

pub use menu_filter::MenuFilter;
pub use pan_viewport::PanViewport;
pub use reservation_form::ReservationForm;
pub use reservation_modal::ReservationModal;
pub use smooth_scroll::SmoothScroll;
