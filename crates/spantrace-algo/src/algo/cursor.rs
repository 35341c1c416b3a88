// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Pull-based replay of a finished trace.
//!
//! The engines produce the whole trace up front. A presentation layer walks
//! it with a [`TraceCursor`] at whatever pace it likes; there is no timer or
//! playback state inside the engines.

use crate::algo::{Edge, MstResult, Step};

/// The view after applying one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    /// Number of steps applied so far (1-based)
    pub position: usize,
    pub step: &'a Step,
    /// Tree edges accepted up to and including this step
    pub tree: &'a [Edge],
    pub running_cost: f64,
}

/// Cursor over the steps of an [`MstResult`].
#[derive(Debug, Clone)]
pub struct TraceCursor<'a> {
    result: &'a MstResult,
    position: usize,
    accepted: usize,
}

impl<'a> TraceCursor<'a> {
    pub fn new(result: &'a MstResult) -> Self {
        Self {
            result,
            position: 0,
            accepted: 0,
        }
    }

    /// Steps applied so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.result.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.steps.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.result.steps.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.result.steps.len()
    }

    /// Tree edges accepted within the applied steps.
    pub fn tree(&self) -> &'a [Edge] {
        &self.result.mst_edges[..self.accepted]
    }

    pub fn running_cost(&self) -> f64 {
        match self.position {
            0 => 0.0,
            p => self.result.steps[p - 1].running_cost,
        }
    }

    /// Apply the next step.
    pub fn advance(&mut self) -> Option<Frame<'a>> {
        let step = self.result.steps.get(self.position)?;
        self.position += 1;
        if step.accepted {
            self.accepted += 1;
        }
        Some(self.frame_for(step))
    }

    /// Jump so that exactly `position` steps are applied (clamped to the
    /// trace length). Returns the frame of the last applied step.
    pub fn seek(&mut self, position: usize) -> Option<Frame<'a>> {
        // `self.len()` on `&mut Self` would resolve to `ExactSizeIterator::len`
        let position = position.min(self.result.steps.len());
        self.accepted = self.result.steps[..position]
            .iter()
            .filter(|s| s.accepted)
            .count();
        self.position = position;
        self.current()
    }

    /// Frame of the last applied step, `None` before the first step.
    pub fn current(&self) -> Option<Frame<'a>> {
        let step = self.result.steps.get(self.position.checked_sub(1)?)?;
        Some(self.frame_for(step))
    }

    /// Back to the state before the first step.
    pub fn reset(&mut self) {
        self.position = 0;
        self.accepted = 0;
    }

    fn frame_for(&self, step: &'a Step) -> Frame<'a> {
        Frame {
            position: self.position,
            step,
            tree: self.tree(),
            running_cost: step.running_cost,
        }
    }
}

impl<'a> Iterator for TraceCursor<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for TraceCursor<'_> {}
