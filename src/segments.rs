//! Splits body text into plain runs and interactive runs.
//!
//! Facts carry a single trigger word that opens a popup, projects carry a list of
//! words that become outbound links. Both render from an ordered list of
//! [`Segment`]s whose text concatenates back to the source text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("link word is empty")]
    EmptyWord,
    #[error("link word '{0}' not found in text")]
    MissingWord(String),
    #[error("{words} link words but {links} links")]
    LengthMismatch { words: usize, links: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Trigger(&'a str),
    Link { label: &'a str, href: &'a str },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(s) | Segment::Trigger(s) => s,
            Segment::Link { label, .. } => label,
        }
    }
}

/// Result of splitting a sentence at its trigger word.
///
/// `trigger` is `None` when the sentence could not be split, in which case `before`
/// holds the whole sentence and the trigger is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSplit<'a> {
    pub before: &'a str,
    pub trigger: Option<&'a str>,
    pub after: &'a str,
}

impl<'a> TriggerSplit<'a> {
    pub fn unsplit(text: &'a str) -> Self {
        TriggerSplit {
            before: text,
            trigger: None,
            after: "",
        }
    }

    pub fn segments(&self) -> Vec<Segment<'a>> {
        let mut out = Vec::with_capacity(3);
        if !self.before.is_empty() {
            out.push(Segment::Plain(self.before));
        }
        if let Some(trigger) = self.trigger {
            out.push(Segment::Trigger(trigger));
        }
        if !self.after.is_empty() {
            out.push(Segment::Plain(self.after));
        }
        out
    }
}

pub fn try_split_trigger<'a>(text: &'a str, word: &str) -> Result<TriggerSplit<'a>, SplitError> {
    if word.is_empty() {
        return Err(SplitError::EmptyWord);
    }
    let start = text
        .find(word)
        .ok_or_else(|| SplitError::MissingWord(word.to_string()))?;
    let end = start + word.len();
    Ok(TriggerSplit {
        before: &text[..start],
        trigger: Some(&text[start..end]),
        after: &text[end..],
    })
}

/// Splits `text` at the first occurrence of `word`, rendering it unsplit if the
/// word cannot be found.
pub fn split_trigger<'a>(text: &'a str, word: &str) -> TriggerSplit<'a> {
    try_split_trigger(text, word).unwrap_or_else(|e| {
        log::warn!("rendering fact unsplit: {e}");
        TriggerSplit::unsplit(text)
    })
}

fn link_segments_inner<'a>(
    text: &'a str,
    words: &'a [String],
    links: &'a [String],
    mut on_missing: impl FnMut(&str),
) -> Vec<Segment<'a>> {
    let mut out = Vec::with_capacity(words.len() * 2 + 1);
    let mut rest = text;
    for (word, href) in words.iter().zip(links) {
        let found = if word.is_empty() { None } else { rest.find(word.as_str()) };
        let Some(start) = found else {
            on_missing(word);
            continue;
        };
        let end = start + word.len();
        if start > 0 {
            out.push(Segment::Plain(&rest[..start]));
        }
        out.push(Segment::Link {
            label: &rest[start..end],
            href,
        });
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push(Segment::Plain(rest));
    }
    out
}

/// Segments a project description, turning each word into a link to the entry at the
/// same position in `links`.
///
/// Each word is searched for in the text remaining after the previous match. Words
/// that cannot be found are skipped and scanning resumes from the same position.
pub fn link_segments<'a>(text: &'a str, words: &'a [String], links: &'a [String]) -> Vec<Segment<'a>> {
    if words.len() != links.len() {
        log::warn!(
            "{} link words but {} links, extra entries ignored",
            words.len(),
            links.len()
        );
    }
    link_segments_inner(text, words, links, |word| {
        log::warn!("link word '{word}' not found in description");
    })
}

/// Like [`link_segments`] but reports the first authoring defect instead of degrading.
pub fn try_link_segments<'a>(
    text: &'a str,
    words: &'a [String],
    links: &'a [String],
) -> Result<Vec<Segment<'a>>, SplitError> {
    if words.len() != links.len() {
        return Err(SplitError::LengthMismatch {
            words: words.len(),
            links: links.len(),
        });
    }
    let mut missing = None;
    let segments = link_segments_inner(text, words, links, |word| {
        if missing.is_none() {
            missing = Some(if word.is_empty() {
                SplitError::EmptyWord
            } else {
                SplitError::MissingWord(word.to_string())
            });
        }
    });
    match missing {
        Some(e) => Err(e),
        None => Ok(segments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn join(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn test_split_trigger_rejoins() {
        let text = "I can solve a Rubik's cube in under 2 minutes.";
        let split = split_trigger(text, "Rubik's cube");
        assert_eq!(split.before, "I can solve a ");
        assert_eq!(split.trigger, Some("Rubik's cube"));
        assert_eq!(split.after, " in under 2 minutes.");
        assert_eq!(join(&split.segments()), text);
    }

    #[test]
    fn test_split_trigger_at_edges() {
        let split = split_trigger("sunset", "sunset");
        assert_eq!(split.segments(), vec![Segment::Trigger("sunset")]);

        let split = split_trigger("watch the sunset", "sunset");
        assert_eq!(
            split.segments(),
            vec![Segment::Plain("watch the "), Segment::Trigger("sunset")]
        );
    }

    #[test]
    fn test_split_trigger_missing_word_is_inert() {
        let text = "I collect vintage postcards.";
        assert_eq!(
            try_split_trigger(text, "stamps"),
            Err(SplitError::MissingWord("stamps".to_string()))
        );
        let split = split_trigger(text, "stamps");
        assert_eq!(split, TriggerSplit::unsplit(text));
        assert_eq!(split.segments(), vec![Segment::Plain(text)]);
    }

    #[test]
    fn test_split_trigger_empty_word() {
        assert_eq!(try_split_trigger("abc", ""), Err(SplitError::EmptyWord));
        assert_eq!(split_trigger("abc", "").trigger, None);
    }

    #[test]
    fn test_split_trigger_uses_first_occurrence() {
        let split = split_trigger("a van and a van", "van");
        assert_eq!(split.before, "a ");
        assert_eq!(split.after, " and a van");
    }

    #[test]
    fn test_link_segments_rejoin_and_targets() {
        let text = "Built with Swift, tiles from OpenStreetMap, hosted on Fly.";
        let words = strings(&["Swift", "OpenStreetMap"]);
        let links = strings(&["https://swift.org", "https://osm.org"]);
        let segments = try_link_segments(text, &words, &links).unwrap();

        assert_eq!(join(&segments), text);
        assert_eq!(
            segments,
            vec![
                Segment::Plain("Built with "),
                Segment::Link {
                    label: "Swift",
                    href: "https://swift.org"
                },
                Segment::Plain(", tiles from "),
                Segment::Link {
                    label: "OpenStreetMap",
                    href: "https://osm.org"
                },
                Segment::Plain(", hosted on Fly."),
            ]
        );
    }

    #[test]
    fn test_link_segments_resume_after_previous_match() {
        // the second "data" must be linked, not the first one again
        let text = "data in, data out";
        let words = strings(&["data", "data"]);
        let links = strings(&["first", "second"]);
        let segments = link_segments(text, &words, &links);
        assert_eq!(join(&segments), text);
        assert_eq!(
            segments[2],
            Segment::Link {
                label: "data",
                href: "second"
            }
        );
    }

    #[test]
    fn test_link_segments_word_before_previous_match_is_missing() {
        let text = "NOAA records drawn with D3.js";
        let words = strings(&["D3.js", "NOAA"]);
        let links = strings(&["https://d3js.org", "https://noaa.gov"]);
        assert_eq!(
            try_link_segments(text, &words, &links),
            Err(SplitError::MissingWord("NOAA".to_string()))
        );
        let segments = link_segments(text, &words, &links);
        assert_eq!(join(&segments), text);
        assert_eq!(
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Link { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_link_segments_without_links() {
        let text = "A community board for hikers.";
        let segments = link_segments(text, &[], &[]);
        assert_eq!(segments, vec![Segment::Plain(text)]);
    }

    #[test]
    fn test_link_segments_length_mismatch() {
        let text = "alpha beta";
        let words = strings(&["alpha", "beta"]);
        let links = strings(&["a"]);
        assert_eq!(
            try_link_segments(text, &words, &links),
            Err(SplitError::LengthMismatch { words: 2, links: 1 })
        );
        let segments = link_segments(text, &words, &links);
        assert_eq!(
            segments,
            vec![
                Segment::Link {
                    label: "alpha",
                    href: "a"
                },
                Segment::Plain(" beta")
            ]
        );
    }
}
