/// The decorated surface, as seen by the over-scroll engine.
///
/// Implementations wrap whatever the host's scrollable actually is (a list,
/// an image view, a canvas). The engine only asks about the content's
/// edges, applies a translation, and reads the scroll position for fling
/// arbitration.
pub trait ContentAdapter {
    /// Whether the content is at its absolute start (cannot scroll
    /// backward any further).
    fn is_at_absolute_start(&self) -> bool;

    /// Whether the content is at its absolute end (cannot scroll forward
    /// any further).
    fn is_at_absolute_end(&self) -> bool;

    /// Translate the decorated surface by `offset` logical px along the
    /// decorator's axis. Zero restores the neutral position.
    fn apply_offset(&mut self, offset: f32);

    /// The content's current scroll position, in logical px from its
    /// start. Used only by the fling hand-off.
    fn current_scroll_offset(&self) -> f32;

    /// Whether the content has room to scroll in the given direction
    /// (`forward == true` meaning toward the end).
    fn can_scroll_further(&self, forward: bool) -> bool;
}
