/// Mock execution observer.
pub mod observer;
