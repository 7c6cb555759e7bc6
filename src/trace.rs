use std::fmt::Debug;

use crate::pass::Pass;
use crate::run::Run;

/// Points during a sort at which a [`Tracer`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A new pass is about to start.
    Pass(Pass),
    BeforeMerge { left: Run, right: Run },
    AfterMerge { left: Run, right: Run },
}

/// Observes the state of the slice while it is being sorted.
///
/// Tracers only get shared access and can't influence the outcome of the sort. Scratch space is
/// not exposed, outside of a merge all of its slots are moved-from.
pub trait Tracer<T> {
    fn trace(&mut self, event: &TraceEvent, v: &[T]);
}

impl<T, F> Tracer<T> for F
where
    F: FnMut(&TraceEvent, &[T]),
{
    #[inline]
    fn trace(&mut self, event: &TraceEvent, v: &[T]) {
        self(event, v)
    }
}

/// Ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl<T> Tracer<T> for NoopTracer {
    #[inline(always)]
    fn trace(&mut self, _event: &TraceEvent, _v: &[T]) {}
}

/// Logs the slice around every merge at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugTracer;

impl<T: Debug> Tracer<T> for DebugTracer {
    fn trace(&mut self, event: &TraceEvent, v: &[T]) {
        match event {
            TraceEvent::Pass(pass) => {
                tracing::debug!(run_len = pass.run_len, len = pass.len, "starting pass");
            }
            TraceEvent::BeforeMerge { left, right } => {
                tracing::debug!(%left, %right, array = ?v, "before merge");
            }
            TraceEvent::AfterMerge { left, right } => {
                tracing::debug!(%left, %right, array = ?v, "after merge");
            }
        }
    }
}
