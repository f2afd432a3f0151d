//! Game action definitions

/// Everything the player (or a developer) can ask for
///
/// Keyboard / gamepad mappings:
/// - Left, A / D-pad left, left stick  = MoveLeft
/// - Right, D / D-pad right, left stick = MoveRight
/// - Up, W / South (A)                  = Jump
/// - Space / East (B), West (X)         = Dash
/// - Escape / Start                     = Quit
/// - F1 / F2 / F3                       = debug toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Gameplay (held state)
    MoveLeft,
    MoveRight,
    Jump,
    Dash,
    Quit,

    // Debug (edge-triggered)
    ToggleDebugOverlay,
    ToggleCollisionLog,
    CycleFpsLimit,
}

/// Held-state of the gameplay actions, sampled once per frame
///
/// Only what is held this frame matters: holding Dash keeps retrying it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
    pub quit: bool,
}
