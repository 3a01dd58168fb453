pub mod progress_observer;

pub use progress_observer::ProgressObserver;
