pub mod event;
pub mod raw_event;
