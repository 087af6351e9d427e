pub mod html;


pub use html::extract;
