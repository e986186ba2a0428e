use core::ops::Range;

use crate::{Direction, IndexWindow};

/// Attach/detach work produced by [`WindowManager::shift`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rebalance {
    /// Side the buffer was replenished on.
    pub direction: Direction,
    /// Indexes to attach just beyond the old rendered boundary (ascending).
    pub attach: Range<usize>,
    /// Indexes to detach from the trailing boundary (ascending).
    pub detach: Range<usize>,
}

/// Owns the rendered and visible index windows of a sequence of `total` slides.
///
/// The rendered window is a bounded buffer around the active slide; the visible window is the
/// active slide plus `visible_count` slides per flank, always contained in the rendered one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowManager {
    total: usize,
    buffer_depth: usize,
    rebalance_threshold: usize,
    rendered: IndexWindow,
    visible: IndexWindow,
}

impl WindowManager {
    /// Builds the initial windows around `active`.
    ///
    /// Sequences that fit in `2 * buffer_depth` are rendered whole.
    pub fn new(
        total: usize,
        active: usize,
        visible_count: usize,
        buffer_depth: usize,
        rebalance_threshold: usize,
    ) -> Self {
        debug_assert!(total > 0, "WindowManager: empty sequence");
        let last = total.saturating_sub(1);
        let active = active.min(last);
        let rendered = if total <= buffer_depth.saturating_mul(2) {
            IndexWindow::new(0, last)
        } else {
            IndexWindow::new(
                active.saturating_sub(buffer_depth),
                active.saturating_add(buffer_depth).min(last),
            )
        };
        Self {
            total,
            buffer_depth,
            rebalance_threshold,
            rendered,
            visible: visible_around(active, visible_count, last),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn rendered(&self) -> IndexWindow {
        self.rendered
    }

    pub fn visible(&self) -> IndexWindow {
        self.visible
    }

    pub fn buffer_depth(&self) -> usize {
        self.buffer_depth
    }

    /// Largest rendered span the manager will ever hold.
    pub fn max_span(&self) -> usize {
        self.buffer_depth.saturating_mul(2)
    }

    fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Follows one committed step of the active slide in `direction`.
    ///
    /// `active` is the index after the step. Returns the attach/detach work when the visible
    /// window came within the rebalance threshold of a rendered boundary that is not yet the
    /// sequence edge.
    pub fn shift(
        &mut self,
        direction: Direction,
        active: usize,
        visible_count: usize,
    ) -> Option<Rebalance> {
        // Derived from `active` so a bound clamped at an edge does not drift.
        self.visible = visible_around(active, visible_count, self.last());

        let rebalance = match direction {
            Direction::Right => self.rebalance_right(active),
            Direction::Left => self.rebalance_left(active),
        };

        #[cfg(feature = "tracing")]
        if let Some(r) = &rebalance {
            cdebug!(
                direction = ?r.direction,
                attach_start = r.attach.start,
                attach_end = r.attach.end,
                detach_start = r.detach.start,
                detach_end = r.detach.end,
                "WindowManager::shift rebalance"
            );
        }
        debug_assert!(
            self.rendered.contains_window(self.visible),
            "WindowManager: visible window escaped the rendered window"
        );
        debug_assert!(self.rendered.span() <= self.max_span());
        rebalance
    }

    fn rebalance_right(&mut self, active: usize) -> Option<Rebalance> {
        let IndexWindow { head, tail } = self.rendered;
        if tail >= self.last() || tail.saturating_sub(self.visible.tail) > self.rebalance_threshold
        {
            return None;
        }

        let add = self.buffer_depth.saturating_sub(tail.saturating_sub(active));
        if add == 0 {
            return None;
        }
        let new_tail = tail.saturating_add(add).min(self.last());
        // Never detach what the visible window still covers.
        let remove = add.min(self.visible.head.saturating_sub(head));

        self.rendered = IndexWindow::new(head + remove, new_tail);
        Some(Rebalance {
            direction: Direction::Right,
            attach: tail + 1..new_tail + 1,
            detach: head..head + remove,
        })
    }

    fn rebalance_left(&mut self, active: usize) -> Option<Rebalance> {
        let IndexWindow { head, tail } = self.rendered;
        if head == 0 || self.visible.head.saturating_sub(head) > self.rebalance_threshold {
            return None;
        }

        let add = self.buffer_depth.saturating_sub(active.saturating_sub(head));
        if add == 0 {
            return None;
        }
        let new_head = head.saturating_sub(add);
        let remove = add.min(tail.saturating_sub(self.visible.tail));

        self.rendered = IndexWindow::new(new_head, tail - remove);
        Some(Rebalance {
            direction: Direction::Left,
            attach: new_head..head,
            detach: tail + 1 - remove..tail + 1,
        })
    }
}

fn visible_around(active: usize, visible_count: usize, last: usize) -> IndexWindow {
    IndexWindow::new(
        active.saturating_sub(visible_count),
        active.saturating_add(visible_count).min(last),
    )
}
