use std::collections::HashMap;
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex};

use crate::av::TIME_UNSET;
use crate::error::{DemuxError, Result};

// PTS values are 33-bit; this is the first value past the wrap point.
const MAX_PTS_PLUS_ONE: i64 = 1 << 33;

/// How a [`TimestampAdjuster`] establishes its source-to-output offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMode {
    /// The output timeline equals the source timeline; only wraparound
    /// correction is applied, never a time shift.
    NoOffset,
    /// The offset is established exactly once by one of several
    /// cooperating producer threads; the others wait for it.
    Shared,
    /// The offset shifts the first adjusted sample to the given
    /// microsecond value.
    FirstSampleAt(i64),
}

#[derive(Debug)]
struct AdjusterState {
    mode: OffsetMode,
    offset_us: Option<i64>,
    last_unadjusted_us: Option<i64>,
    pending_next_us: HashMap<ThreadId, i64>,
    interrupted: bool,
}

impl AdjusterState {
    fn new(mode: OffsetMode) -> Self {
        AdjusterState {
            mode,
            offset_us: initial_offset(mode),
            last_unadjusted_us: None,
            pending_next_us: HashMap::new(),
            interrupted: false,
        }
    }
}

fn initial_offset(mode: OffsetMode) -> Option<i64> {
    match mode {
        OffsetMode::NoOffset => Some(0),
        OffsetMode::Shared | OffsetMode::FirstSampleAt(_) => None,
    }
}

/// Normalizes a wrapping 33-bit 90 kHz clock into a single monotonic
/// microsecond timeline.
///
/// One adjuster is created per stream, or shared by all producer threads of
/// one program. Raw PTS values go through
/// [`adjust_ts_timestamp`](Self::adjust_ts_timestamp), which unwraps the
/// 33-bit counter against the previous sample and converts ticks to
/// microseconds; already-converted values go through
/// [`adjust_sample_timestamp`](Self::adjust_sample_timestamp). The offset
/// between source and output timelines is resolved lazily on the first
/// adjusted sample and stays fixed until [`reset`](Self::reset).
///
/// ```
/// use demuxkit::av::{OffsetMode, TimestampAdjuster};
///
/// let adjuster = TimestampAdjuster::new(OffsetMode::FirstSampleAt(0));
///
/// // 90,000 ticks is one second; the first sample is shifted to zero.
/// assert_eq!(adjuster.adjust_ts_timestamp(90_000), 0);
/// assert_eq!(adjuster.adjust_ts_timestamp(180_000), 1_000_000);
/// ```
#[derive(Debug)]
pub struct TimestampAdjuster {
    state: Mutex<AdjusterState>,
    offset_resolved: Condvar,
}

impl TimestampAdjuster {
    /// Creates an adjuster in the given offset mode.
    pub fn new(mode: OffsetMode) -> Self {
        TimestampAdjuster {
            state: Mutex::new(AdjusterState::new(mode)),
            offset_resolved: Condvar::new(),
        }
    }

    /// Unwraps a 33-bit 90 kHz PTS, converts it to microseconds and adjusts
    /// it onto the output timeline.
    ///
    /// [`TIME_UNSET`] passes through unchanged. When a previous sample
    /// exists, the wrap count closest to it decides between the candidate
    /// one wrap below and the candidate at that count, so the unwrapped
    /// value never jumps by more than half the counter range.
    pub fn adjust_ts_timestamp(&self, pts: i64) -> i64 {
        if pts == TIME_UNSET {
            return TIME_UNSET;
        }
        let mut state = self.state.lock();
        let mut pts = pts;
        if let Some(last_us) = state.last_unadjusted_us {
            let last_pts = us_to_non_wrapped_pts(last_us);
            let closest_wrap_count = (last_pts + MAX_PTS_PLUS_ONE / 2) / MAX_PTS_PLUS_ONE;
            let wrap_below = pts + MAX_PTS_PLUS_ONE * (closest_wrap_count - 1);
            let wrap_above = pts + MAX_PTS_PLUS_ONE * closest_wrap_count;
            pts = if (wrap_below - last_pts).abs() < (wrap_above - last_pts).abs() {
                wrap_below
            } else {
                wrap_above
            };
        }
        self.adjust_sample_locked(&mut state, pts_to_us(pts))
    }

    /// Adjusts a microsecond sample timestamp onto the output timeline.
    ///
    /// [`TIME_UNSET`] passes through unchanged. The first call in
    /// [`OffsetMode::Shared`] or [`OffsetMode::FirstSampleAt`] resolves the
    /// offset and wakes every thread blocked in
    /// [`shared_initialize_or_wait`](Self::shared_initialize_or_wait).
    pub fn adjust_sample_timestamp(&self, time_us: i64) -> i64 {
        if time_us == TIME_UNSET {
            return TIME_UNSET;
        }
        let mut state = self.state.lock();
        self.adjust_sample_locked(&mut state, time_us)
    }

    fn adjust_sample_locked(&self, state: &mut AdjusterState, time_us: i64) -> i64 {
        let offset_us = match state.offset_us {
            Some(offset_us) => offset_us,
            None => {
                let desired_us = match state.mode {
                    OffsetMode::FirstSampleAt(first_us) => first_us,
                    OffsetMode::Shared => {
                        let thread_id = thread::current().id();
                        match state.pending_next_us.get(&thread_id) {
                            Some(&pending_us) => pending_us,
                            None => panic!(
                                "shared mode requires shared_initialize_or_wait(true, ..) \
                                 on this thread before the first sample"
                            ),
                        }
                    }
                    // NoOffset resolves to zero at construction/reset.
                    OffsetMode::NoOffset => unreachable!("no-offset mode is always resolved"),
                };
                let offset_us = desired_us - time_us;
                log::debug!("resolved timestamp offset: {}us", offset_us);
                state.offset_us = Some(offset_us);
                self.offset_resolved.notify_all();
                offset_us
            }
        };
        state.last_unadjusted_us = Some(time_us);
        time_us + offset_us
    }

    /// Lets producer threads in [`OffsetMode::Shared`] coordinate on who
    /// resolves the offset.
    ///
    /// Legal only in shared mode; calling it in any other mode is a caller
    /// bug and panics. Returns immediately once the offset is resolved.
    /// While unresolved, a `can_initialize` caller stashes
    /// `next_sample_timestamp_us` under its thread identity and returns, to
    /// become the thread whose next
    /// [`adjust_sample_timestamp`](Self::adjust_sample_timestamp) call
    /// resolves the offset. Any other caller blocks until the offset
    /// resolves, or until [`interrupt`](Self::interrupt) cancels the wait
    /// with [`DemuxError::Interrupted`].
    pub fn shared_initialize_or_wait(
        &self,
        can_initialize: bool,
        next_sample_timestamp_us: i64,
    ) -> Result<()> {
        let mut state = self.state.lock();
        assert!(
            state.mode == OffsetMode::Shared,
            "shared_initialize_or_wait is only valid in shared mode"
        );
        if state.offset_us.is_some() {
            return Ok(());
        }
        if can_initialize {
            state
                .pending_next_us
                .insert(thread::current().id(), next_sample_timestamp_us);
            return Ok(());
        }
        while state.offset_us.is_none() {
            if state.interrupted {
                return Err(DemuxError::Interrupted);
            }
            self.offset_resolved.wait(&mut state);
        }
        Ok(())
    }

    /// Cancels every thread blocked in
    /// [`shared_initialize_or_wait`](Self::shared_initialize_or_wait); they
    /// return [`DemuxError::Interrupted`]. Cleared by
    /// [`reset`](Self::reset).
    pub fn interrupt(&self) {
        let mut state = self.state.lock();
        state.interrupted = true;
        self.offset_resolved.notify_all();
    }

    /// Atomically reinitializes the adjuster for a new mode, discarding the
    /// resolved offset, the last sample and all pending per-thread stashes.
    /// Called on seek or timeline discontinuity.
    pub fn reset(&self, mode: OffsetMode) {
        let mut state = self.state.lock();
        state.mode = mode;
        state.offset_us = initial_offset(mode);
        state.last_unadjusted_us = None;
        state.pending_next_us.clear();
        state.interrupted = false;
    }

    /// Whether the source-to-output offset has been resolved.
    pub fn is_initialized(&self) -> bool {
        self.state.lock().offset_us.is_some()
    }

    /// The timestamp the first adjusted sample maps to, or [`TIME_UNSET`]
    /// outside [`OffsetMode::FirstSampleAt`].
    pub fn first_sample_timestamp_us(&self) -> i64 {
        match self.state.lock().mode {
            OffsetMode::FirstSampleAt(first_us) => first_us,
            OffsetMode::NoOffset | OffsetMode::Shared => TIME_UNSET,
        }
    }

    /// The most recently returned adjusted timestamp, or the first-sample
    /// target (respectively [`TIME_UNSET`]) before any sample was adjusted.
    pub fn last_adjusted_timestamp_us(&self) -> i64 {
        let state = self.state.lock();
        match (state.last_unadjusted_us, state.offset_us) {
            (Some(last_us), Some(offset_us)) => last_us + offset_us,
            _ => match state.mode {
                OffsetMode::FirstSampleAt(first_us) => first_us,
                OffsetMode::NoOffset | OffsetMode::Shared => TIME_UNSET,
            },
        }
    }

    /// The resolved source-to-output offset, or [`TIME_UNSET`] while
    /// unresolved.
    pub fn timestamp_offset_us(&self) -> i64 {
        self.state.lock().offset_us.unwrap_or(TIME_UNSET)
    }
}

/// Converts a 90 kHz tick count to microseconds.
///
/// Goes through 128-bit intermediates so unwrapped tick counts far beyond
/// the 33-bit range cannot overflow.
pub fn pts_to_us(pts: i64) -> i64 {
    (i128::from(pts) * 1_000_000 / 90_000) as i64
}

/// Converts microseconds to a 90 kHz tick count without wrapping.
pub fn us_to_non_wrapped_pts(time_us: i64) -> i64 {
    (i128::from(time_us) * 90_000 / 1_000_000) as i64
}

/// Converts microseconds to a 90 kHz tick count wrapped to 33 bits.
pub fn us_to_wrapped_pts(time_us: i64) -> i64 {
    us_to_non_wrapped_pts(time_us) % MAX_PTS_PLUS_ONE
}
