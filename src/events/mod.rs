pub mod controls;
pub mod pointer;

pub use controls::wire_start_button;
pub use pointer::wire_pointer_handlers;
