use serde::{Deserialize, Serialize};

/// Volume used when no configuration overrides it.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Mutable session values, alive for the lifetime of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Index into the lesson catalog; always in range once a lesson is active.
    pub current_lesson: usize,
    /// Playback volume in [0, 1], read at every note trigger.
    pub volume: f32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_lesson: 0,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl SessionState {
    pub fn with_volume(volume: f32) -> Self {
        Self {
            volume: normalize_volume(volume).unwrap_or(DEFAULT_VOLUME),
            ..Self::default()
        }
    }
}

/// Clamp a raw volume into [0, 1]. Non-finite input yields None.
pub fn normalize_volume(raw: f32) -> Option<f32> {
    if raw.is_finite() {
        Some(raw.clamp(0.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = SessionState::default();
        assert_eq!(s.current_lesson, 0);
        assert!((s.volume - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn normalize_clamps_and_rejects_nan() {
        assert_eq!(normalize_volume(0.2), Some(0.2));
        assert_eq!(normalize_volume(-1.0), Some(0.0));
        assert_eq!(normalize_volume(7.5), Some(1.0));
        assert_eq!(normalize_volume(f32::NAN), None);
        assert_eq!(normalize_volume(f32::INFINITY), None);
    }

    #[test]
    fn with_volume_falls_back_on_garbage() {
        assert!((SessionState::with_volume(f32::NAN).volume - DEFAULT_VOLUME).abs() < f32::EPSILON);
        assert!((SessionState::with_volume(2.0).volume - 1.0).abs() < f32::EPSILON);
    }
}
