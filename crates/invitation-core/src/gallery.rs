//! Lightbox cursor over the gallery.
//!
//! The cursor is either closed (`None`) or points at a valid image. Stepping
//! wraps around in both directions, so it can never leave the range.

/// Which gallery image, if any, is enlarged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryCursor {
    len: usize,
    current: Option<usize>,
}

impl GalleryCursor {
    /// A closed cursor over a gallery of `len` images
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    /// Number of images the cursor ranges over
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The enlarged image index, or `None` when the lightbox is closed
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Enlarge image `index`. Ignored when `index` is out of range (which
    /// includes every index of an empty gallery).
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.current = Some(index);
        } else {
            tracing::debug!(index, len = self.len, "Ignoring gallery open out of range");
        }
    }

    /// Step forward, wrapping to the first image. No-op while closed.
    pub fn next(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + 1) % self.len);
        }
    }

    /// Step back, wrapping to the last image. No-op while closed.
    pub fn previous(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + self.len - 1) % self.len);
        }
    }

    /// Close the lightbox. Idempotent.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Point the cursor at a gallery of a different length.
    ///
    /// Keeps the open image when it still exists, closes otherwise.
    pub fn retarget(&mut self, len: usize) {
        self.len = len;
        if matches!(self.current, Some(i) if i >= len) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let cursor = GalleryCursor::new(3);
        assert_eq!(cursor.current(), None);
        assert!(!cursor.is_open());
    }

    #[test]
    fn seven_images_wrap_after_the_last() {
        let mut cursor = GalleryCursor::new(7);
        cursor.open(0);
        for _ in 0..6 {
            cursor.next();
        }
        assert_eq!(cursor.current(), Some(6));

        cursor.next();
        assert_eq!(cursor.current(), Some(0));
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut cursor = GalleryCursor::new(4);
        cursor.open(0);
        cursor.previous();
        assert_eq!(cursor.current(), Some(3));
    }

    #[test]
    fn single_image_stays_put() {
        let mut cursor = GalleryCursor::new(1);
        cursor.open(0);
        cursor.next();
        assert_eq!(cursor.current(), Some(0));
        cursor.previous();
        assert_eq!(cursor.current(), Some(0));
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut cursor = GalleryCursor::new(0);
        cursor.open(0);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut cursor = GalleryCursor::new(3);
        cursor.open(1);
        cursor.open(3);
        assert_eq!(cursor.current(), Some(1));
    }

    #[test]
    fn stepping_while_closed_is_a_noop() {
        let mut cursor = GalleryCursor::new(5);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut cursor = GalleryCursor::new(2);
        cursor.open(1);
        cursor.close();
        cursor.close();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn retarget_closes_when_image_disappears() {
        let mut cursor = GalleryCursor::new(5);
        cursor.open(4);
        cursor.retarget(6);
        assert_eq!(cursor.current(), Some(4));

        cursor.retarget(3);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.len(), 3);
    }
}
