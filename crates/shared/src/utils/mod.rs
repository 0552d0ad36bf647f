mod gracefull;
mod logs;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
