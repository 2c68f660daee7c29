//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest subscriber count (updated by the feed task)
///
/// Only the newest value matters, so a burst of updates collapses into a
/// single redraw.
pub static SUBSCRIBER_COUNT: Signal<CriticalSectionRawMutex, u32> = Signal::new();
