pub mod debounce;
pub mod detail;
pub mod engine;
pub mod loader;
pub mod page;
