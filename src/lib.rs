// Library interface for lapwatch
// The stopwatch engine lives here so it can be driven without a window

pub mod clock;
pub mod errors;
pub mod format;
pub mod laps;
pub mod stopwatch;
pub mod ticker;
pub mod view;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::LapwatchError;
pub use format::format_elapsed;
pub use laps::{Lap, LapBook};
pub use stopwatch::{ClockState, Stopwatch};
pub use ticker::{ManualScheduler, ThreadScheduler, TickScheduler, TickTask};
pub use view::StopwatchView;
