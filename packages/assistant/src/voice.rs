//! Optional voice output seam.
//!
//! Speech synthesis is a host capability (the dashboard used the
//! browser's), not something this core implements. Front ends inject an
//! implementation; the default [`NoVoice`] reports unsupported and drops
//! the text. Speaking is fire-and-forget — failures are never surfaced
//! to the user.

/// A sink that can vocalize assistant replies.
pub trait VoiceOutput: Send + Sync {
    /// Whether the host environment can actually produce speech.
    fn is_supported(&self) -> bool;

    /// Vocalizes the text. Fire-and-forget; implementations swallow
    /// their own failures.
    fn speak(&self, text: &str);
}

/// The no-op voice output used when the host has no speech capability.
pub struct NoVoice;

impl VoiceOutput for NoVoice {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&self, text: &str) {
        log::debug!("Voice output unsupported; dropping {} chars", text.len());
    }
}
