pub mod submit_leave;
