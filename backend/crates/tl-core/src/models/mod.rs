pub mod post_event;
pub mod post_form;
pub mod post_id;
