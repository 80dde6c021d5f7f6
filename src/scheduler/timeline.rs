/*!
 * Execution Timeline
 * Contiguous CPU slices per process, the data behind a Gantt chart
 */

use crate::core::limits::GANTT_COLUMNS;
use crate::core::types::{Pid, ProcessIndex, Tick};
use serde::Serialize;
use std::fmt::Write;

/// Half-open interval `[start, end)` during which one process held the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionSlice {
    #[serde(skip)]
    pub(crate) index: ProcessIndex,
    pub pid: Pid,
    pub name: String,
    pub start: Tick,
    pub end: Tick,
}

impl ExecutionSlice {
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered, non-overlapping execution slices of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<ExecutionSlice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `index` ran over `[start, end)`, merging with the
    /// previous slice when it is the same process and there is no gap
    pub(crate) fn extend(
        &mut self,
        index: ProcessIndex,
        pid: Pid,
        name: &str,
        start: Tick,
        end: Tick,
    ) {
        if start >= end {
            return;
        }

        if let Some(last) = self.slices.last_mut() {
            debug_assert!(last.end <= start);
            if last.index == index && last.end == start {
                last.end = end;
                return;
            }
        }

        self.slices.push(ExecutionSlice {
            index,
            pid,
            name: name.to_string(),
            start,
            end,
        });
    }

    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    /// Ticks the CPU spent executing any process
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(ExecutionSlice::len).sum()
    }

    /// Idle gaps `[start, end)` between slices, up to `until`
    pub fn idle_gaps(&self, until: Tick) -> Vec<(Tick, Tick)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slice in &self.slices {
            if slice.start > cursor {
                gaps.push((cursor, slice.start));
            }
            cursor = slice.end;
        }
        if until > cursor {
            gaps.push((cursor, until));
        }
        gaps
    }

    /// Text Gantt chart, one row per slice
    ///
    /// One column per tick while the run fits in `GANTT_COLUMNS`,
    /// proportionally scaled beyond that. Every slice gets at least one
    /// column.
    pub fn render_gantt(&self) -> String {
        let horizon = self.slices.last().map_or(0, |s| s.end);
        let width = self
            .slices
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for slice in &self.slices {
            let offset = gantt_column(slice.start, horizon);
            let bar = gantt_column(slice.end, horizon).saturating_sub(offset).max(1);
            let _ = writeln!(
                out,
                "{:<width$} |{}{}| {}-{}",
                slice.name,
                " ".repeat(offset),
                "#".repeat(bar),
                slice.start,
                slice.end,
                width = width
            );
        }
        out
    }
}

/// Chart column of `tick` for a chart ending at `horizon`
fn gantt_column(tick: Tick, horizon: Tick) -> usize {
    let columns = GANTT_COLUMNS as u128;
    let scaled = if u128::from(horizon) <= columns {
        u128::from(tick)
    } else {
        u128::from(tick) * columns / u128::from(horizon)
    };
    usize::try_from(scaled.min(columns)).unwrap_or(GANTT_COLUMNS)
}
