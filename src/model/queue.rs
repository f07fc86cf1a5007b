//! User-curated play queue, independent of whatever is on screen

use super::types::Track;

/// Linear queue of tracks with a cursor that starts before the first entry.
///
/// The cursor only moves through `next`/`prev`; `has_prev` is strictly
/// "cursor past index 0", so the first queued track is unreachable once the
/// cursor has moved beyond it by a single step.
#[derive(Clone, Debug, Default)]
pub struct PlayQueue {
    tracks: Vec<Track>,
    /// `None` is the before-first position.
    cursor: Option<usize>,
}

impl PlayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn enqueue_all(&mut self, tracks: Vec<Track>) {
        self.tracks.extend(tracks);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Zero-based position of the current track, if the cursor has entered
    /// the queue.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn has_next(&self) -> bool {
        match self.cursor {
            None => !self.tracks.is_empty(),
            Some(i) => i + 1 < self.tracks.len(),
        }
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    pub fn next(&mut self) -> Option<Track> {
        if !self.has_next() {
            return None;
        }
        let i = self.cursor.map_or(0, |i| i + 1);
        self.cursor = Some(i);
        self.tracks.get(i).cloned()
    }

    pub fn prev(&mut self) -> Option<Track> {
        if !self.has_prev() {
            return None;
        }
        let i = self.cursor.expect("has_prev implies a cursor") - 1;
        self.cursor = Some(i);
        self.tracks.get(i).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str) -> Track {
        Track {
            track_name: name.to_string(),
            track_number: 1,
            album_name: "Album".to_string(),
            artist_name: "Artist".to_string(),
            track_uri: format!("spotify:track:{name}"),
            popularity: None,
        }
    }

    #[test]
    fn traverses_queue_in_order_and_stops_at_the_end() {
        let mut queue = PlayQueue::new();
        queue.enqueue_all(vec![track("t1"), track("t2"), track("t3")]);

        assert_eq!(queue.position(), None);
        assert_eq!(queue.next().unwrap().track_name, "t1");
        assert_eq!(queue.next().unwrap().track_name, "t2");
        assert_eq!(queue.next().unwrap().track_name, "t3");
        assert!(!queue.has_next());
        assert_eq!(queue.next(), None);
        assert_eq!(queue.position(), Some(2));
    }

    #[test]
    fn prev_is_unavailable_at_and_before_the_first_track() {
        let mut queue = PlayQueue::new();
        queue.enqueue(track("t1"));
        queue.enqueue(track("t2"));

        assert!(!queue.has_prev());
        assert_eq!(queue.prev(), None);

        queue.next();
        // Cursor sits on the first track; stepping back would leave the queue.
        assert!(!queue.has_prev());
        assert_eq!(queue.prev(), None);
        assert_eq!(queue.position(), Some(0));

        queue.next();
        assert!(queue.has_prev());
        assert_eq!(queue.prev().unwrap().track_name, "t1");
    }

    #[test]
    fn cursor_stays_within_bounds_across_mixed_operations() {
        let mut queue = PlayQueue::new();
        for op in 0..20 {
            match op % 3 {
                0 => queue.enqueue(track("t")),
                1 => {
                    let had_next = queue.has_next();
                    assert_eq!(queue.next().is_some(), had_next);
                }
                _ => {
                    let had_prev = queue.has_prev();
                    assert_eq!(queue.prev().is_some(), had_prev);
                }
            }
            match queue.position() {
                None => {}
                Some(i) => assert!(i < queue.len()),
            }
        }
    }

    #[test]
    fn clear_resets_cursor_and_contents() {
        let mut queue = PlayQueue::new();
        queue.enqueue_all(vec![track("t1"), track("t2")]);
        queue.next();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.position(), None);
        assert!(!queue.has_next());
        assert!(!queue.has_prev());
    }

    #[test]
    fn enqueue_does_not_deduplicate() {
        let mut queue = PlayQueue::new();
        queue.enqueue(track("t1"));
        queue.enqueue(track("t1"));
        assert_eq!(queue.len(), 2);
    }
}
