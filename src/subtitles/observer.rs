use super::types::RangeLineChange;
use log::debug;

/// Receives every range line rewrite as it happens.
///
/// `()` ignores everything; any `FnMut(&RangeLineChange)` closure works too.
pub trait LineObserver {
    fn on_range_line(&mut self, change: &RangeLineChange);
}

impl LineObserver for () {
    fn on_range_line(&mut self, _change: &RangeLineChange) {}
}

impl<F> LineObserver for F
where
    F: FnMut(&RangeLineChange),
{
    fn on_range_line(&mut self, change: &RangeLineChange) {
        self(change)
    }
}

/// Logs each before/after pair at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LineObserver for LogObserver {
    fn on_range_line(&mut self, change: &RangeLineChange) {
        debug!("Old line {}: {}", change.index, change.before);
        debug!("New line {}: {}", change.index, change.after);
    }
}
