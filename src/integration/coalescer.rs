/// Decides, once per loop, which terminal work the runner still has to do
pub struct Coalescer;

impl Coalescer {
    /// Render when something asked for a frame since the last loop
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, frame_due: bool) -> bool {
        queued_render_reqs > 0 || frame_due
    }

    /// Only the last of several queued resizes matters
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        match events.last() {
            Some(&size) if Some(size) != last_seen => Some(size),
            _ => None,
        }
    }
}
