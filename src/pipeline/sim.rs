//! Mock data generators for the simulated pipeline.
//!
//! Pure functions producing placeholder artifacts: random waveforms and a
//! canned transcript built from a fixed sentence pool.  Randomness is
//! deliberately unseeded — these are display fabrications, not fixtures.

use rand::Rng;

use super::state::TranscriptionSegment;

/// Samples per mock waveform.
pub const WAVEFORM_SAMPLES: usize = 100;

/// Fixed width of every mock transcript segment, in seconds.
pub const SEGMENT_SECS: f64 = 3.0;

/// Upper bound on the number of mock transcript segments.
pub const MAX_SEGMENTS: usize = 10;

/// Sentence pool cycled through by the mock transcriber.
pub const SAMPLE_TEXTS: &[&str] = &[
    "Welcome to our presentation.",
    "Today we'll discuss important topics.",
    "Let's begin with the introduction.",
    "This is a significant point to consider.",
    "We'll explore various aspects of this subject.",
    "Thank you for your attention.",
];

const SPEAKERS: [&str; 2] = ["Speaker 1", "Speaker 2"];

/// 100 amplitude samples drawn independently and uniformly from `[0, 100)`.
pub fn generate_waveform() -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..WAVEFORM_SAMPLES)
        .map(|_| rng.gen_range(0.0..100.0))
        .collect()
}

/// Fabricate `min(floor(duration / 3), 10)` contiguous 3-second transcript
/// segments starting at 0.
///
/// Sentences cycle through [`SAMPLE_TEXTS`], the speaker label alternates
/// between two fixed names, and each confidence is drawn uniformly from
/// `[0.9, 1.0)`.
pub fn generate_segments(duration: f64) -> Vec<TranscriptionSegment> {
    let mut rng = rand::thread_rng();
    let count = ((duration / SEGMENT_SECS).floor() as usize).min(MAX_SEGMENTS);

    (0..count)
        .map(|i| TranscriptionSegment {
            id: format!("seg-{i}"),
            start: i as f64 * SEGMENT_SECS,
            end: (i + 1) as f64 * SEGMENT_SECS,
            text: SAMPLE_TEXTS[i % SAMPLE_TEXTS.len()].to_string(),
            speaker: Some(SPEAKERS[i % 2].to_string()),
            confidence: Some(rng.gen_range(0.9..1.0)),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_has_100_samples_in_range() {
        let w = generate_waveform();
        assert_eq!(w.len(), 100);
        assert!(w.iter().all(|&a| (0.0..100.0).contains(&a)));
    }

    #[test]
    fn duration_25_yields_8_contiguous_segments() {
        let segs = generate_segments(25.0);
        assert_eq!(segs.len(), 8);

        for (i, seg) in segs.iter().enumerate() {
            assert_eq!(seg.id, format!("seg-{i}"));
            assert_eq!(seg.start, i as f64 * 3.0);
            assert_eq!(seg.end, (i + 1) as f64 * 3.0);
        }
    }

    #[test]
    fn segment_count_is_capped_at_10() {
        assert_eq!(generate_segments(3_600.0).len(), 10);
    }

    #[test]
    fn short_video_yields_no_segments() {
        assert!(generate_segments(2.9).is_empty());
        assert!(generate_segments(0.0).is_empty());
    }

    #[test]
    fn sentences_cycle_through_the_pool() {
        let segs = generate_segments(30.0); // 10 segments, pool of 6
        assert_eq!(segs[0].text, SAMPLE_TEXTS[0]);
        assert_eq!(segs[5].text, SAMPLE_TEXTS[5]);
        assert_eq!(segs[6].text, SAMPLE_TEXTS[0]);
        assert_eq!(segs[9].text, SAMPLE_TEXTS[3]);
    }

    #[test]
    fn speakers_alternate() {
        let segs = generate_segments(12.0);
        assert_eq!(segs[0].speaker.as_deref(), Some("Speaker 1"));
        assert_eq!(segs[1].speaker.as_deref(), Some("Speaker 2"));
        assert_eq!(segs[2].speaker.as_deref(), Some("Speaker 1"));
    }

    #[test]
    fn confidence_is_within_bounds() {
        for seg in generate_segments(30.0) {
            let c = seg.confidence.unwrap();
            assert!((0.9..1.0).contains(&c), "confidence out of range: {c}");
        }
    }
}
