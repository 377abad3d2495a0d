pub mod scene;
pub mod time;
pub mod debounce;
pub mod rng;
