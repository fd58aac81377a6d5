#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SoundError {
    #[error("fetching `{path}` failed: {reason}")]
    Fetch { path: String, reason: String },
    #[error("decoding `{path}` failed: {reason}")]
    Decode { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slot<B> {
    Pending,
    Ready(B),
    Failed,
}

/// Progress of a batch load, reported after every settled item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub failed: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.settled() >= self.total
    }

    /// Settled share in \[0, 1\]; an empty batch counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.settled() as f64 / self.total as f64
        }
    }

    pub fn label(&self) -> String {
        if self.failed > 0 {
            format!(
                "Loading sounds: {}/{} ({} failed)",
                self.loaded, self.total, self.failed
            )
        } else {
            format!("Loading sounds: {}/{}", self.loaded, self.total)
        }
    }
}

/// Sound library bookkeeping: which clips are loaded and which plays next.
///
/// The library is generic over the decoded buffer type so the rotation rules
/// can be exercised without a browser. Slots are filled in whatever order the
/// loads settle; the index-to-source mapping never changes.
pub struct SoundLibrary<B> {
    sources: Vec<String>,
    slots: Vec<Slot<B>>,
    rotation_index: usize,
}

impl<B> SoundLibrary<B> {
    pub fn new(sources: Vec<String>) -> Self {
        let slots = sources.iter().map(|_| Slot::Pending).collect();
        Self {
            sources,
            slots,
            rotation_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn slot(&self, index: usize) -> Option<&Slot<B>> {
        self.slots.get(index)
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation_index
    }

    pub fn has_ready(&self) -> bool {
        self.slots.iter().any(|s| matches!(s, Slot::Ready(_)))
    }

    pub fn progress(&self) -> LoadProgress {
        let mut p = LoadProgress {
            total: self.slots.len(),
            ..LoadProgress::default()
        };
        for s in &self.slots {
            match s {
                Slot::Ready(_) => p.loaded += 1,
                Slot::Failed => p.failed += 1,
                Slot::Pending => {}
            }
        }
        p
    }

    /// Store a decoded buffer. Only pending slots accept a result.
    pub fn mark_ready(&mut self, index: usize, buffer: B) -> LoadProgress {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) if matches!(slot, Slot::Pending) => *slot = Slot::Ready(buffer),
            Some(_) => log::warn!("[sounds] slot {} already settled, result dropped", index),
            None => log::warn!("[sounds] no slot {} in a library of {}", index, len),
        }
        self.progress()
    }

    pub fn mark_failed(&mut self, index: usize, err: &SoundError) -> LoadProgress {
        log::warn!("[sounds] {}", err);
        if let Some(slot) = self.slots.get_mut(index) {
            if matches!(slot, Slot::Pending) {
                *slot = Slot::Failed;
            }
        }
        self.progress()
    }

    /// Select the next ready clip, starting at the rotation index and wrapping.
    ///
    /// The rotation index moves to the slot after the chosen one. Pending and
    /// failed slots are skipped; with nothing ready the index stays put.
    pub fn next_ready(&mut self) -> Option<(usize, &B)> {
        let len = self.slots.len();
        let index = (0..len)
            .map(|offset| (self.rotation_index + offset) % len)
            .find(|&i| matches!(self.slots[i], Slot::Ready(_)))?;
        self.rotation_index = (index + 1) % len;
        match &self.slots[index] {
            Slot::Ready(buffer) => Some((index, buffer)),
            _ => None,
        }
    }
}
