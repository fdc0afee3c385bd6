use crate::clock::Clock;

/// The host surface the two phases act on: scroll offset reads, the
/// jump-to-origin request, and the cosmetic bring-into-view request
/// issued while extracting.
pub trait Viewport {
    fn scroll_top(&mut self) -> u64;
    fn scroll_to_origin(&mut self);
    fn scroll_into_view(&mut self, index: usize);
}

/// Viewport over a parsed snapshot. No lazy history is left to load, so
/// the offset is already at the origin and view requests are no-ops.
pub struct StaticViewport;

impl Viewport for StaticViewport {
    fn scroll_top(&mut self) -> u64 {
        0
    }

    fn scroll_to_origin(&mut self) {}

    fn scroll_into_view(&mut self, _index: usize) {}
}

/// Drive the viewport to its topmost extent so lazy-loaded history is
/// materialized before extraction begins. Polls until the offset read
/// *before* the scroll request is zero; a zero observed here can be one
/// frame stale, which may end the phase a tick early. There is no
/// timeout: a feed that never settles at the origin keeps the phase
/// polling until the operator aborts.
pub async fn run_scroll_to_top(viewport: &mut impl Viewport, clock: &impl Clock, poll_ms: u64) {
    log::trace!("In run_scroll_to_top");

    loop {
        clock.tick(poll_ms).await;

        let offset = viewport.scroll_top();
        log::info!("Scrolling to first message...");
        viewport.scroll_to_origin();

        if offset == 0 {
            log::info!("Reached first message");
            break;
        }
    }
}
