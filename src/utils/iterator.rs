/// A grid iterator that yields (x, y, pixel_idx) tuples in raster-scan order:
/// rows top to bottom, each row left to right.
///
/// This iterator is designed to be completely inlined and optimized away
/// by the compiler, matching the performance of hand-written nested loops.
#[derive(Debug, Clone, Copy)]
pub struct GridIterator {
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    pixel_idx: usize,
}

impl GridIterator {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x: 0,
            y: 0,
            pixel_idx: 0,
        }
    }
}

impl Iterator for GridIterator {
    type Item = (usize, usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.y >= self.height {
            return None;
        }

        let result = (self.x, self.y, self.pixel_idx);

        self.pixel_idx += 1;
        self.x += 1;

        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIterator {
    #[inline]
    fn len(&self) -> usize {
        self.width * self.height - self.pixel_idx
    }
}

#[cfg(test)]
mod tests {
    use super::GridIterator;

    #[test]
    fn test_grid_iterator_raster_order() {
        let visited: Vec<_> = GridIterator::new(3, 2).collect();
        assert_eq!(
            visited,
            vec![
                (0, 0, 0),
                (1, 0, 1),
                (2, 0, 2),
                (0, 1, 3),
                (1, 1, 4),
                (2, 1, 5)
            ]
        );
    }

    #[test]
    fn test_grid_iterator_visits_indices_once() {
        const SIZE: usize = 97;
        let mut visit = vec![false; SIZE * SIZE];
        let iter = GridIterator::new(SIZE, SIZE);
        assert_eq!(iter.len(), SIZE * SIZE);
        for (x, y, idx) in iter {
            assert_eq!(SIZE * y + x, idx, "1D pixel index missmatches 2D coordinates");
            assert!(!visit[idx], "Pixel visited twice");
            visit[idx] = true;
        }
        assert!(visit.iter().all(|v| *v), "Pixel not visited");
    }

    #[test]
    fn test_grid_iterator_empty() {
        assert_eq!(GridIterator::new(0, 5).count(), 0);
        assert_eq!(GridIterator::new(5, 0).count(), 0);
    }
}
