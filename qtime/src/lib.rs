mod clock;
mod time;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use time::{ctime_format, date_time_str, unix_time};
pub use timer::Timer;

pub use chrono;
