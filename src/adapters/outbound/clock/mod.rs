/// Clock adapters backed by the system time
mod system_clock;

pub use system_clock::SystemClock;
