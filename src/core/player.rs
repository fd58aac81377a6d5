use super::sounds::SoundLibrary;
use std::fmt::Debug;

/// A started clip that can be silenced.
pub trait ClipHandle {
    fn stop(&mut self);
}

/// Owns the single currently playing clip.
pub struct ClipPlayer<H: ClipHandle> {
    current: Option<H>,
}

impl<H: ClipHandle> Default for ClipPlayer<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: ClipHandle> ClipPlayer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Play the next ready clip of `library` through `start`.
    ///
    /// Returns the library index that was started. When nothing is ready this
    /// is a no-op and whatever is playing keeps playing. A failed `start` is
    /// logged and leaves the player idle.
    pub fn play_next<B, E, F>(&mut self, library: &mut SoundLibrary<B>, start: F) -> Option<usize>
    where
        E: Debug,
        F: FnOnce(&B) -> Result<H, E>,
    {
        let (index, buffer) = library.next_ready()?;
        self.stop_current();
        match start(buffer) {
            Ok(handle) => {
                self.current = Some(handle);
                Some(index)
            }
            Err(e) => {
                log::warn!("[player] clip {} failed to start: {:?}", index, e);
                None
            }
        }
    }

    pub fn stop_current(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.stop();
        }
    }
}
