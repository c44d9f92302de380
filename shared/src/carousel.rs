//! Pagination controller for the bookmark carousel.
//!
//! The carousel pages absolutely (0, 2, 4, ...) and only wraps when the page
//! is mapped onto an item index. Keying slides by the absolute page lets the
//! renderer treat every step as a brand new slide, so even a single item can
//! be paginated forever.

use std::ops::Range;

use tracing::debug;

/// Number of items displayed together on one page. Also the pagination step.
pub const GROUP_SIZE: usize = 2;

/// Minimum `|offset| * velocity` for a drag release to count as a swipe.
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

/// Horizontal distance, in px, a slide enters from and exits to.
pub const SLIDE_DISTANCE_PX: f64 = 1_000.0;

/// Tunables of one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Items per page; the wrap modulus is rounded up to a multiple of it.
    pub group_size: usize,
    /// See [`SWIPE_CONFIDENCE_THRESHOLD`].
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            group_size: GROUP_SIZE,
            swipe_threshold: SWIPE_CONFIDENCE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    fn effective_group_size(&self) -> usize {
        self.group_size.max(1)
    }
}

/// Sign of the most recent pagination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Negative step.
    Backward,
    /// No step taken yet, or a zero step.
    #[default]
    Still,
    /// Positive step.
    Forward,
}

impl Direction {
    /// Direction of a signed step.
    pub fn from_step(step: i64) -> Self {
        match step.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::Still,
        }
    }

    /// `-1`, `0` or `1`.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Absolute page plus the direction of the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PageState {
    /// Unbounded absolute page.
    pub page: i64,
    /// Direction of the last [`PageState::paginate`] call.
    pub direction: Direction,
}

impl PageState {
    /// Moves `step` pages and records its sign.
    pub fn paginate(self, step: i64) -> PageState {
        PageState {
            page: self.page.saturating_add(step),
            direction: Direction::from_step(step),
        }
    }
}

/// How a released drag should move the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeIntent {
    /// Swiped towards negative x: show the next group.
    PageForward,
    /// Swiped towards positive x: show the previous group.
    PageBackward,
    /// Too short or too slow to be deliberate.
    NoOp,
}

impl SwipeIntent {
    /// Signed page step for this intent, `None` for [`SwipeIntent::NoOp`].
    pub fn step(self, group_size: usize) -> Option<i64> {
        let group = i64::try_from(group_size.max(1)).unwrap_or(i64::MAX);
        match self {
            SwipeIntent::PageForward => Some(group),
            SwipeIntent::PageBackward => Some(-group),
            SwipeIntent::NoOp => None,
        }
    }
}

/// Combined swipe strength. A short fast flick and a long slow drag can both
/// clear the threshold.
pub fn swipe_power(offset_x: f64, velocity_x: f64) -> f64 {
    offset_x.abs() * velocity_x
}

/// Classifies a drag release against [`SWIPE_CONFIDENCE_THRESHOLD`].
pub fn classify_swipe(offset_x: f64, velocity_x: f64) -> SwipeIntent {
    classify_swipe_with(offset_x, velocity_x, SWIPE_CONFIDENCE_THRESHOLD)
}

/// Classifies a drag release against a custom threshold.
pub fn classify_swipe_with(offset_x: f64, velocity_x: f64, threshold: f64) -> SwipeIntent {
    let confidence = swipe_power(offset_x, velocity_x);
    if confidence < -threshold {
        SwipeIntent::PageForward
    } else if confidence > threshold {
        SwipeIntent::PageBackward
    } else {
        SwipeIntent::NoOp
    }
}

/// Shifts `value` by a multiple of `max - min` so it lies in `[min, max)`.
///
/// Returns `None` when the range is empty.
pub fn wrap(min: i64, max: i64, value: i64) -> Option<i64> {
    // i128 holds every span and offset of two i64s
    let (min, max, value) = (i128::from(min), i128::from(max), i128::from(value));
    let span = max - min;
    if span <= 0 {
        return None;
    }
    i64::try_from(min + (value - min).rem_euclid(span)).ok()
}

/// Size of the wrap range: `item_count` rounded up to whole groups.
pub fn wrap_span(item_count: usize, group_size: usize) -> usize {
    let group = group_size.max(1);
    item_count.div_ceil(group).saturating_mul(group)
}

/// Index of the first visible item for `page`, or `None` when there are no
/// items to show.
pub fn resolve_visible_index(page: i64, item_count: usize, group_size: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let span = i64::try_from(wrap_span(item_count, group_size)).ok()?;
    let index = wrap(0, span, page)?;
    usize::try_from(index).ok()
}

/// Items shown for `page`, clamped to `item_count` the way a slice would be.
pub fn visible_range(page: i64, item_count: usize, group_size: usize) -> Option<Range<usize>> {
    let start = resolve_visible_index(page, item_count, group_size)?;
    let end = start.saturating_add(group_size.max(1)).min(item_count);
    Some(start.min(item_count)..end)
}

/// Keyframe offsets for the slide transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVariant {
    /// x offset, in px.
    pub x: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl SlideVariant {
    /// Where a new slide starts: from the right when moving forward.
    pub fn enter(direction: Direction) -> Self {
        let x = if direction.sign() > 0 { SLIDE_DISTANCE_PX } else { -SLIDE_DISTANCE_PX };
        Self { x, opacity: 0.0 }
    }

    /// Resting position.
    pub fn center() -> Self {
        Self { x: 0.0, opacity: 1.0 }
    }

    /// Where the old slide leaves to: to the right when moving backward.
    pub fn exit(direction: Direction) -> Self {
        let x = if direction.sign() < 0 { SLIDE_DISTANCE_PX } else { -SLIDE_DISTANCE_PX };
        Self { x, opacity: 0.0 }
    }
}

/// Page state plus the items it paginates over.
///
/// Only [`CarouselState::paginate`] and [`CarouselState::set_items`] mutate
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<T> {
    config: CarouselConfig,
    pages: PageState,
    items: Vec<T>,
}

impl<T> Default for CarouselState<T> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl<T> CarouselState<T> {
    /// Empty carousel at page 0.
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            pages: PageState::default(),
            items: Vec::new(),
        }
    }

    /// Tunables this carousel was built with.
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Current absolute page and direction.
    pub fn page_state(&self) -> PageState {
        self.pages
    }

    /// All items, in fetch order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the items. The page is kept; it wraps onto the new list.
    pub fn set_items(&mut self, items: Vec<T>) {
        debug!(count = items.len(), page = self.pages.page, "carousel items replaced");
        self.items = items;
    }

    /// Moves `step` absolute pages.
    pub fn paginate(&mut self, step: i64) -> PageState {
        self.pages = self.pages.paginate(step);
        debug!(page = self.pages.page, step, "carousel paginated");
        self.pages
    }

    /// One group forward.
    pub fn next_page(&mut self) -> PageState {
        self.apply_intent(SwipeIntent::PageForward)
    }

    /// One group backward.
    pub fn prev_page(&mut self) -> PageState {
        self.apply_intent(SwipeIntent::PageBackward)
    }

    /// Applies a classified swipe; `NoOp` leaves the state unchanged.
    pub fn apply_intent(&mut self, intent: SwipeIntent) -> PageState {
        match intent.step(self.config.effective_group_size()) {
            Some(step) => self.paginate(step),
            None => self.pages,
        }
    }

    /// Classifies a drag release with this carousel's threshold and applies it.
    pub fn release_swipe(&mut self, offset_x: f64, velocity_x: f64) -> PageState {
        let intent = classify_swipe_with(offset_x, velocity_x, self.config.swipe_threshold);
        self.apply_intent(intent)
    }

    /// First visible item index, `None` while empty.
    pub fn visible_index(&self) -> Option<usize> {
        resolve_visible_index(self.pages.page, self.items.len(), self.config.effective_group_size())
    }

    /// Items on the current page.
    pub fn visible_items(&self) -> &[T] {
        match visible_range(self.pages.page, self.items.len(), self.config.effective_group_size()) {
            Some(range) => &self.items[range],
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_adds_step_and_records_sign() {
        let start = PageState::default();
        let forward = start.paginate(2);
        assert_eq!(forward, PageState { page: 2, direction: Direction::Forward });

        let back = forward.paginate(-2).paginate(-2);
        assert_eq!(back, PageState { page: -2, direction: Direction::Backward });

        let still = back.paginate(0);
        assert_eq!(still.page, -2);
        assert_eq!(still.direction, Direction::Still);
    }

    #[test]
    fn paginate_saturates_instead_of_overflowing() {
        let edge = PageState { page: i64::MAX, direction: Direction::Still };
        assert_eq!(edge.paginate(2).page, i64::MAX);
    }

    #[test]
    fn resolve_index_matches_observed_layouts() {
        assert_eq!(resolve_visible_index(0, 5, 2), Some(0));
        assert_eq!(resolve_visible_index(3, 5, 2), Some(3));
        assert_eq!(resolve_visible_index(6, 5, 2), Some(0));
        assert_eq!(resolve_visible_index(-2, 5, 2), Some(4));
    }

    #[test]
    fn resolve_index_is_none_for_empty_list() {
        assert_eq!(resolve_visible_index(0, 0, 2), None);
        assert_eq!(resolve_visible_index(-7, 0, 2), None);
        assert_eq!(visible_range(4, 0, 2), None);
    }

    #[test]
    fn resolve_index_stays_in_range_and_is_periodic() {
        for item_count in 1..=7usize {
            for group_size in 1..=3usize {
                let span = wrap_span(item_count, group_size) as i64;
                for page in -20i64..=20 {
                    let index = resolve_visible_index(page, item_count, group_size)
                        .expect("non-empty list");
                    assert!((index as i64) < span);
                    for k in -3i64..=3 {
                        assert_eq!(
                            resolve_visible_index(page + k * span, item_count, group_size),
                            Some(index)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn zero_group_size_is_treated_as_one() {
        assert_eq!(wrap_span(3, 0), 3);
        assert_eq!(resolve_visible_index(4, 3, 0), Some(1));
    }

    #[test]
    fn visible_range_clamps_to_item_count() {
        assert_eq!(visible_range(0, 5, 2), Some(0..2));
        assert_eq!(visible_range(3, 5, 2), Some(3..5));
        assert_eq!(visible_range(4, 5, 2), Some(4..5));
        assert_eq!(visible_range(5, 5, 2), Some(5..5));
    }

    #[test]
    fn wrap_handles_offset_ranges() {
        assert_eq!(wrap(10, 14, 9), Some(13));
        assert_eq!(wrap(10, 14, 14), Some(10));
        assert_eq!(wrap(3, 3, 0), None);
    }

    #[test]
    fn wrap_does_not_overflow_at_integer_bounds() {
        assert_eq!(wrap(10, 14, i64::MIN), Some(12));
        assert_eq!(wrap(10, 14, i64::MAX), Some(11));
        assert_eq!(wrap(-5, 5, i64::MIN), Some(2));
        assert_eq!(wrap(i64::MIN, i64::MIN + 3, i64::MAX), Some(i64::MIN));
    }

    #[test]
    fn wrap_accepts_spans_wider_than_i64() {
        assert_eq!(wrap(-1, i64::MAX, 5), Some(5));
        assert_eq!(wrap(i64::MIN, i64::MAX, -7), Some(-7));
        assert_eq!(wrap(-1, i64::MAX, i64::MAX), Some(-1));
    }

    #[test]
    fn classify_swipe_uses_signed_confidence() {
        assert_eq!(classify_swipe(-2.0, 6000.0), SwipeIntent::PageBackward);
        assert_eq!(classify_swipe(-2.0, -6000.0), SwipeIntent::PageForward);
        assert_eq!(classify_swipe(200.0, -80.0), SwipeIntent::PageForward);
        assert_eq!(classify_swipe(50.0, 1.0), SwipeIntent::NoOp);
        assert_eq!(classify_swipe(100.0, 100.0), SwipeIntent::NoOp);
        assert_eq!(classify_swipe(100.0, -100.0), SwipeIntent::NoOp);
    }

    #[test]
    fn intent_step_uses_group_size() {
        assert_eq!(SwipeIntent::PageForward.step(2), Some(2));
        assert_eq!(SwipeIntent::PageBackward.step(2), Some(-2));
        assert_eq!(SwipeIntent::NoOp.step(2), None);
    }

    #[test]
    fn slide_variants_follow_direction() {
        assert_eq!(SlideVariant::enter(Direction::Forward).x, SLIDE_DISTANCE_PX);
        assert_eq!(SlideVariant::enter(Direction::Backward).x, -SLIDE_DISTANCE_PX);
        assert_eq!(SlideVariant::exit(Direction::Forward).x, -SLIDE_DISTANCE_PX);
        assert_eq!(SlideVariant::exit(Direction::Backward).x, SLIDE_DISTANCE_PX);
        assert_eq!(SlideVariant::center().opacity, 1.0);
    }

    #[test]
    fn state_pages_by_group_and_wraps_items() {
        let mut state = CarouselState::default();
        assert!(state.visible_items().is_empty());
        assert_eq!(state.visible_index(), None);

        state.set_items(vec![0, 1, 2, 3, 4]);
        assert_eq!(state.visible_items(), &[0, 1]);

        state.next_page();
        state.next_page();
        assert_eq!(state.visible_items(), &[4]);

        state.next_page();
        assert_eq!(state.page_state().page, 6);
        assert_eq!(state.visible_items(), &[0, 1]);

        state.prev_page();
        state.prev_page();
        state.prev_page();
        state.prev_page();
        assert_eq!(state.page_state().page, -2);
        assert_eq!(state.page_state().direction, Direction::Backward);
        assert_eq!(state.visible_items(), &[4]);
    }

    #[test]
    fn release_swipe_ignores_weak_gestures() {
        let mut state: CarouselState<u8> = CarouselState::default();
        state.set_items(vec![1, 2, 3]);
        let before = state.page_state();
        assert_eq!(state.release_swipe(50.0, 1.0), before);

        let after = state.release_swipe(-300.0, -500.0);
        assert_eq!(after.page, 2);
        assert_eq!(after.direction, Direction::Forward);
    }

    #[test]
    fn clearing_items_keeps_the_page() {
        let mut state = CarouselState::default();
        state.set_items(vec!['a', 'b', 'c']);
        state.next_page();
        state.set_items(Vec::new());
        assert_eq!(state.page_state().page, 2);
        assert!(state.visible_items().is_empty());
    }
}
