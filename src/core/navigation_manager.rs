/// Direction of the last accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn is_next(self) -> bool {
        self == Direction::Next
    }

    pub fn from_is_next(is_next: bool) -> Self {
        if is_next {
            Direction::Next
        } else {
            Direction::Prev
        }
    }
}

/// The triple every slide reads to pick its animation state.
///
/// Only [`NavigationManager`] writes it, and always as a whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active: usize,
    pub prev_active: usize,
    pub direction: Direction,
}

impl NavigationState {
    pub fn is_next(&self) -> bool {
        self.direction.is_next()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: 0,
            prev_active: 0,
            direction: Direction::Next,
        }
    }
}

/// Emitted once per accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub index: usize,
    pub previous: usize,
    /// `None` when the request carried no direction (indicator click, index sync).
    pub requested: Option<Direction>,
}

type IndexCallback = Box<dyn FnMut(usize, usize)>;

/// Caller hooks, each called with `(new_index, previous_index)`.
#[derive(Default)]
pub struct NavigationCallbacks {
    pub on_change: Option<IndexCallback>,
    pub on_next: Option<IndexCallback>,
    pub on_prev: Option<IndexCallback>,
}

impl std::fmt::Debug for NavigationCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_next", &self.on_next.is_some())
            .field("on_prev", &self.on_prev.is_some())
            .finish()
    }
}

pub struct NavigationManager {
    len: usize,
    state: NavigationState,
    strict_indexing: bool,
    cycle_navigation: bool,
    synced_index: Option<usize>,
    callbacks: NavigationCallbacks,
}

impl NavigationManager {
    pub fn new() -> Self {
        Self {
            len: 0,
            state: NavigationState::default(),
            strict_indexing: true,
            cycle_navigation: true,
            synced_index: None,
            callbacks: NavigationCallbacks::default(),
        }
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    pub fn set_policy(&mut self, strict_indexing: bool, cycle_navigation: bool) {
        self.strict_indexing = strict_indexing;
        self.cycle_navigation = cycle_navigation;
    }

    pub fn callbacks_mut(&mut self) -> &mut NavigationCallbacks {
        &mut self.callbacks
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active(&self) -> usize {
        self.state.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the last child, `0` for an empty sequence.
    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        if self.len == 0 {
            0
        } else if self.strict_indexing {
            index.min(self.last_index())
        } else {
            index
        }
    }

    /// The single writer of [`NavigationState`].
    ///
    /// Callbacks run before the state is replaced and see the previous
    /// active index, so a panicking callback leaves the state untouched.
    pub fn go_to(
        &mut self,
        target: usize,
        direction: Option<Direction>,
        run_callbacks: bool,
    ) -> NavigationEvent {
        let index = self.clamp_index(target);
        let previous = self.state.active;

        if run_callbacks {
            match direction {
                Some(Direction::Next) => {
                    if let Some(on_next) = self.callbacks.on_next.as_mut() {
                        on_next(index, previous);
                    }
                }
                Some(Direction::Prev) => {
                    if let Some(on_prev) = self.callbacks.on_prev.as_mut() {
                        on_prev(index, previous);
                    }
                }
                None => {}
            }
            if let Some(on_change) = self.callbacks.on_change.as_mut() {
                on_change(index, previous);
            }
        }

        let resolved = direction.unwrap_or(Direction::from_is_next(index > previous));
        self.state = NavigationState {
            active: index,
            prev_active: previous,
            direction: resolved,
        };

        log::debug!(
            "carousel: {} -> {} ({:?}, requested {}, len {})",
            previous,
            index,
            resolved,
            target,
            self.len
        );

        NavigationEvent {
            index,
            previous,
            requested: direction,
        }
    }

    /// Moves one step, wrapping or holding at the ends.
    ///
    /// Holding still goes through [`Self::go_to`], so callbacks fire with an
    /// unchanged index.
    pub fn advance(&mut self, forward: bool) -> NavigationEvent {
        let last = self.last_index();
        let active = self.state.active;

        let target = if forward {
            if active >= last {
                if self.cycle_navigation {
                    0
                } else {
                    active
                }
            } else {
                active + 1
            }
        } else if active == 0 {
            if self.cycle_navigation {
                last
            } else {
                active
            }
        } else {
            active - 1
        };

        self.go_to(target, Some(Direction::from_is_next(forward)), true)
    }

    pub fn next(&mut self) -> NavigationEvent {
        self.advance(true)
    }

    pub fn previous(&mut self) -> NavigationEvent {
        self.advance(false)
    }

    /// Applies a caller-supplied index when it differs from the last one seen.
    ///
    /// The first sync (mount) only fires callbacks when `change_on_first_render`
    /// is set; later changes always do.
    pub fn sync_index(
        &mut self,
        requested: usize,
        change_on_first_render: bool,
    ) -> Option<NavigationEvent> {
        let first = match self.synced_index {
            Some(seen) if seen == requested => return None,
            Some(_) => false,
            None => true,
        };
        self.synced_index = Some(requested);

        let run_callbacks = !first || change_on_first_render;
        log::debug!(
            "carousel: index property -> {} (first: {}, callbacks: {})",
            requested,
            first,
            run_callbacks
        );
        Some(self.go_to(requested, None, run_callbacks))
    }

    pub fn can_go_next(&self) -> bool {
        self.cycle_navigation || self.state.active < self.last_index()
    }

    pub fn can_go_previous(&self) -> bool {
        self.cycle_navigation || self.state.active != 0
    }
}

impl Default for NavigationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NavigationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationManager")
            .field("len", &self.len)
            .field("state", &self.state)
            .field("strict_indexing", &self.strict_indexing)
            .field("cycle_navigation", &self.cycle_navigation)
            .field("synced_index", &self.synced_index)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn manager(len: usize, cycle: bool) -> NavigationManager {
        let mut nav = NavigationManager::new();
        nav.set_len(len);
        nav.set_policy(true, cycle);
        nav
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut nav = manager(len, true);
                nav.go_to(start, None, false);
                for _ in 0..len {
                    nav.next();
                }
                assert_eq!(nav.active(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn holds_at_ends_without_cycling() {
        let mut nav = manager(3, false);
        nav.go_to(2, None, false);
        nav.next();
        assert_eq!(nav.active(), 2);

        nav.go_to(0, None, false);
        nav.previous();
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn go_to_derives_direction_from_comparison() {
        let mut nav = manager(5, true);
        nav.go_to(3, None, false);
        assert_eq!(
            nav.state(),
            NavigationState {
                active: 3,
                prev_active: 0,
                direction: Direction::Next
            }
        );

        nav.go_to(1, None, false);
        assert_eq!(
            nav.state(),
            NavigationState {
                active: 1,
                prev_active: 3,
                direction: Direction::Prev
            }
        );

        // Same index is not "greater", so it reads as backwards.
        nav.go_to(1, None, false);
        assert_eq!(nav.state().direction, Direction::Prev);
    }

    #[test]
    fn wraps_forward_from_last() {
        let mut nav = manager(3, true);
        nav.go_to(2, None, false);
        nav.next();
        assert_eq!(
            nav.state(),
            NavigationState {
                active: 0,
                prev_active: 2,
                direction: Direction::Next
            }
        );
    }

    #[test]
    fn wraps_backward_from_first() {
        let mut nav = manager(4, true);
        let event = nav.previous();
        assert_eq!(event.index, 3);
        assert_eq!(event.requested, Some(Direction::Prev));
        assert_eq!(nav.state().direction, Direction::Prev);
    }

    #[test]
    fn strict_indexing_clamps() {
        let mut nav = manager(3, true);
        nav.go_to(5, None, false);
        assert_eq!(nav.active(), 2);
    }

    #[test]
    fn loose_indexing_keeps_out_of_range() {
        let mut nav = manager(3, true);
        nav.set_policy(false, true);
        nav.go_to(5, None, false);
        assert_eq!(nav.active(), 5);

        nav.next();
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn loose_index_at_usize_max_advances_without_overflow() {
        let mut nav = manager(3, false);
        nav.set_policy(false, false);
        nav.go_to(usize::MAX, None, false);
        assert!(!nav.can_go_next());

        nav.next();
        assert_eq!(nav.active(), usize::MAX);

        nav.set_policy(false, true);
        nav.next();
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn empty_sequence_forces_zero() {
        let mut nav = manager(0, true);
        nav.set_policy(false, true);
        nav.go_to(7, None, false);
        assert_eq!(nav.active(), 0);
        nav.next();
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn callbacks_fire_in_order_with_previous_index() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut nav = manager(3, true);
        nav.go_to(1, None, false);

        let l = Rc::clone(&log);
        nav.callbacks_mut().on_next = Some(Box::new(move |now, prev| {
            l.borrow_mut().push(("next", now, prev));
        }));
        let l = Rc::clone(&log);
        nav.callbacks_mut().on_prev = Some(Box::new(move |now, prev| {
            l.borrow_mut().push(("prev", now, prev));
        }));
        let l = Rc::clone(&log);
        nav.callbacks_mut().on_change = Some(Box::new(move |now, prev| {
            l.borrow_mut().push(("change", now, prev));
        }));

        nav.next();
        nav.previous();
        nav.go_to(0, None, true);
        nav.go_to(2, None, false);

        assert_eq!(
            *log.borrow(),
            vec![
                ("next", 2, 1),
                ("change", 2, 1),
                ("prev", 1, 2),
                ("change", 1, 2),
                ("change", 0, 1),
            ]
        );
    }

    #[test]
    fn holding_at_an_end_still_reports() {
        let count = Rc::new(RefCell::new(0));
        let mut nav = manager(2, false);
        let c = Rc::clone(&count);
        nav.callbacks_mut().on_change = Some(Box::new(move |now, prev| {
            assert_eq!(now, prev);
            *c.borrow_mut() += 1;
        }));
        nav.previous();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn first_sync_is_gated() {
        let count = Rc::new(RefCell::new(0));
        let mut nav = manager(4, true);
        let c = Rc::clone(&count);
        nav.callbacks_mut().on_change = Some(Box::new(move |_, _| *c.borrow_mut() += 1));

        assert!(nav.sync_index(2, false).is_some());
        assert_eq!(nav.active(), 2);
        assert_eq!(*count.borrow(), 0);

        assert!(nav.sync_index(2, false).is_none());

        nav.sync_index(3, false);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn first_sync_fires_when_asked() {
        let count = Rc::new(RefCell::new(0));
        let mut nav = manager(4, true);
        let c = Rc::clone(&count);
        nav.callbacks_mut().on_change = Some(Box::new(move |_, _| *c.borrow_mut() += 1));

        nav.sync_index(0, true);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn button_availability() {
        let mut nav = manager(3, false);
        assert!(!nav.can_go_previous());
        assert!(nav.can_go_next());

        nav.go_to(2, None, false);
        assert!(nav.can_go_previous());
        assert!(!nav.can_go_next());

        nav.set_policy(true, true);
        assert!(nav.can_go_next());
    }
}
