use crate::config::PunctConfig;

/// A contiguous run of words submitted to the labeler as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub len: usize,
}

impl Window {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Plan the windows covering `total_words` words.
///
/// Windows start every `stride` words and hold `chunk_size` words, truncated
/// at the end of the sequence. A sequence shorter than one chunk gets a
/// single window covering all of it; an empty sequence gets none.
pub fn plan_windows(total_words: usize, config: &PunctConfig) -> Vec<Window> {
    if total_words == 0 {
        return Vec::new();
    }
    let chunk_size = config.chunk_size();
    if total_words < chunk_size {
        return vec![Window {
            start: 0,
            len: total_words,
        }];
    }
    (0..total_words)
        .step_by(config.stride())
        .map(|start| Window {
            start,
            len: chunk_size.min(total_words - start),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(chunk_size: usize, overlap: usize) -> PunctConfig {
        PunctConfig::new(chunk_size, overlap).unwrap()
    }

    #[test]
    fn empty_sequence_has_no_windows() {
        assert!(plan_windows(0, &geometry(100, 70)).is_empty());
    }

    #[test]
    fn short_sequence_gets_one_window() {
        let windows = plan_windows(50, &geometry(100, 70));
        assert_eq!(windows, vec![Window { start: 0, len: 50 }]);
    }

    #[test]
    fn long_sequence_strides_until_past_the_end() {
        let windows = plan_windows(150, &geometry(100, 70));
        let starts: Vec<usize> = windows.iter().map(|w| w.start).collect();
        let lens: Vec<usize> = windows.iter().map(|w| w.len).collect();
        assert_eq!(starts, vec![0, 30, 60, 90, 120]);
        assert_eq!(lens, vec![100, 100, 90, 60, 30]);
    }

    #[test]
    fn exact_chunk_length_still_strides() {
        // 100 words at stride 30 start windows at 0, 30, 60 and 90; the
        // later ones just truncate harder.
        let windows = plan_windows(100, &geometry(100, 70));
        let starts: Vec<usize> = windows.iter().map(|w| w.start).collect();
        let lens: Vec<usize> = windows.iter().map(|w| w.len).collect();
        assert_eq!(starts, vec![0, 30, 60, 90]);
        assert_eq!(lens, vec![100, 70, 40, 10]);
    }

    #[test]
    fn window_count_matches_per_position_coverage() {
        let config = geometry(100, 70);
        let windows = plan_windows(150, &config);
        for position in 0..150usize {
            let covering = windows
                .iter()
                .filter(|w| w.start <= position && position < w.end())
                .count();
            assert_eq!(covering, config.coverage(position), "position {position}");
        }
    }

    #[test]
    fn disjoint_geometry_partitions_the_sequence() {
        let windows = plan_windows(10, &geometry(4, 0));
        let starts: Vec<usize> = windows.iter().map(|w| w.start).collect();
        let lens: Vec<usize> = windows.iter().map(|w| w.len).collect();
        assert_eq!(starts, vec![0, 4, 8]);
        assert_eq!(lens, vec![4, 4, 2]);
    }
}
