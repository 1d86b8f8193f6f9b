pub mod wrapped_error;
