//! Subtitle cues, time-aligned cue selection, and SRT rendering.
//!
//! The preview overlays one cue at a time: on every playback-time update the
//! app asks [`cue_at`] for the cue whose inclusive `[start, end]` interval
//! contains the current time.  Cue lists are authored sorted by start and
//! the scan takes the first match, so a timestamp landing exactly on a
//! shared boundary of two back-to-back cues resolves deterministically to
//! the earlier one.

use crate::pipeline::state::Translation;

// ---------------------------------------------------------------------------
// SubtitleCue
// ---------------------------------------------------------------------------

/// A time-bounded subtitle entry with original and translated text.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    /// Cue start in seconds (inclusive).
    pub start: f64,
    /// Cue end in seconds (inclusive).
    pub end: f64,
    pub original: String,
    pub translated: String,
}

/// The fixed demo cue list shown in the preview.
pub fn demo_cues() -> Vec<SubtitleCue> {
    [
        (0.0, 3.0, "Welcome to our presentation.", "हमारी प्रस्तुति में आपका स्वागत है।"),
        (3.0, 6.0, "Today we'll discuss important topics.", "आज हम महत्वपूर्ण विषयों पर चर्चा करेंगे।"),
        (6.0, 9.0, "Let's begin with the introduction.", "आइए परिचय से शुरू करें।"),
        (9.0, 12.0, "This is a significant point to consider.", "यह विचार करने के लिए एक महत्वपूर्ण बिंदु है।"),
    ]
    .into_iter()
    .map(|(start, end, original, translated)| SubtitleCue {
        start,
        end,
        original: original.into(),
        translated: translated.into(),
    })
    .collect()
}

/// Select the cue covering playback time `t` (inclusive both ends).
///
/// First match in list order wins; with start-sorted cues that is the
/// earliest-starting cue.
pub fn cue_at(cues: &[SubtitleCue], t: f64) -> Option<&SubtitleCue> {
    cues.iter().find(|c| t >= c.start && t <= c.end)
}

// ---------------------------------------------------------------------------
// SRT rendering
// ---------------------------------------------------------------------------

/// Render a completed translation as an SRT document.
///
/// One entry per segment, 1-based indices, `HH:MM:SS,mmm` timestamps,
/// translated text as the cue body.
pub fn to_srt(translation: &Translation) -> String {
    let mut out = String::new();
    for (i, seg) in translation.segments.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            srt_timestamp(seg.start),
            srt_timestamp(seg.end),
            seg.translated_text
        ));
    }
    out
}

/// `7.25` → `"00:00:07,250"`.
fn srt_timestamp(seconds: f64) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    format!(
        "{:02}:{:02}:{:02},{:03}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60,
        millis
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::state::TranslationSegment;

    #[test]
    fn demo_cues_are_four_and_start_sorted() {
        let cues = demo_cues();
        assert_eq!(cues.len(), 4);
        assert!(cues.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn cue_selection_inside_an_interval() {
        let cues = demo_cues();
        let cue = cue_at(&cues, 4.5).unwrap();
        assert_eq!(cue.original, "Today we'll discuss important topics.");
    }

    #[test]
    fn bounds_are_inclusive() {
        let cues = demo_cues();
        assert!(cue_at(&cues, 0.0).is_some());
        assert!(cue_at(&cues, 12.0).is_some());
    }

    #[test]
    fn shared_boundary_resolves_to_the_earlier_cue() {
        // t = 3.0 is the first cue's end and the second cue's start.
        let cues = demo_cues();
        let cue = cue_at(&cues, 3.0).unwrap();
        assert_eq!(cue.start, 0.0);
    }

    #[test]
    fn out_of_range_time_selects_nothing() {
        let cues = demo_cues();
        assert!(cue_at(&cues, 12.1).is_none());
        assert!(cue_at(&cues, -0.5).is_none());
    }

    #[test]
    fn srt_timestamps() {
        assert_eq!(srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(srt_timestamp(7.25), "00:00:07,250");
        assert_eq!(srt_timestamp(3_725.5), "01:02:05,500");
    }

    #[test]
    fn srt_renders_one_entry_per_segment() {
        let translation = Translation {
            segments: vec![
                TranslationSegment {
                    id: "seg-0".into(),
                    original_text: "Welcome to our presentation.".into(),
                    translated_text: "हमारी प्रस्तुति में आपका स्वागत है।".into(),
                    start: 0.0,
                    end: 3.0,
                    speaker: Some("Speaker 1".into()),
                },
                TranslationSegment {
                    id: "seg-1".into(),
                    original_text: "Thank you for your attention.".into(),
                    translated_text: "आपके ध्यान के लिए धन्यवाद।".into(),
                    start: 3.0,
                    end: 6.0,
                    speaker: Some("Speaker 2".into()),
                },
            ],
            source_language: "en".into(),
            target_language: "hi".into(),
        };

        let srt = to_srt(&translation);
        let expected = "1\n00:00:00,000 --> 00:00:03,000\nहमारी प्रस्तुति में आपका स्वागत है।\n\n\
                        2\n00:00:03,000 --> 00:00:06,000\nआपके ध्यान के लिए धन्यवाद।\n\n";
        assert_eq!(srt, expected);
    }

    #[test]
    fn empty_translation_renders_empty_srt() {
        let translation = Translation {
            segments: vec![],
            source_language: "en".into(),
            target_language: "hi".into(),
        };
        assert!(to_srt(&translation).is_empty());
    }
}
