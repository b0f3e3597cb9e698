/// One-shot visual feedback fired after an accepted submission.
///
/// Implementations must not fail the caller: anything that goes wrong while
/// rendering the effect is swallowed.
pub trait Celebration: Send + Sync {
    fn burst(&self);
}

/// Celebration that does nothing, for hosts without a rendering surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCelebration;

impl Celebration for NoCelebration {
    fn burst(&self) {}
}
