//! Pure formatting logic for post content.
//!
//! Everything here is independent of the UI layer: turning the raw body into
//! paragraphs, planning where inline images land between them, deriving the
//! palette gradient, and formatting the published date.

use chrono::{DateTime, TimeZone, Utc};

use crate::log_warn;

/// Fallback gradient endpoints for posts whose palette is missing or short.
const DEFAULT_GRADIENT: (&str, &str) = ("#e8e8e8", "#f5f5f5");

/// One renderable piece of the post body, in display order.
///
/// Image fields hold indices into the post's full image list, so a click on
/// any of them opens the lightbox at the right position regardless of where
/// the image ended up in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySegment {
    /// The first paragraph, split for a drop-cap treatment.
    Opener { initial: char, rest: String },
    /// A plain paragraph.
    Paragraph { text: String },
    /// A paragraph with an inline image attached before its text.
    Illustrated { image: usize, text: String },
    /// A trailing group of images that did not fit between paragraphs.
    Gallery { images: Vec<usize> },
}

/// Split a raw post body into non-blank paragraphs, with the title removed.
///
/// The provider stores the title as a literal prefix of the body. It is
/// removed by prefix match rather than by slicing off `title.len()` bytes;
/// if the payload breaks the prefix convention the body is kept whole and a
/// warning is logged instead of corrupting the first paragraph.
pub fn extract_paragraphs(body: Option<&str>, title: &str) -> Vec<String> {
    let Some(body) = body else {
        return Vec::new();
    };

    let stripped = match body.strip_prefix(title) {
        Some(rest) => rest,
        None => {
            log_warn!("post body does not start with its title; rendering body unmodified");
            body
        }
    };

    stripped
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Plan the interleaved body layout for `paragraphs` and `image_count` images.
///
/// Image 0 is the page header and is never placed inline; candidates are
/// images `1..image_count`. With `spacing = paragraphs / images` (integer
/// division), the next unused image is attached at each paragraph index that
/// is a positive multiple of `spacing`, skipping the final paragraph. Images
/// still unused after the final paragraph are emitted as one trailing
/// gallery, in order.
///
/// When there are more images than paragraphs (`spacing == 0`) nothing is
/// inlined and every non-header image goes to the trailing gallery. With no
/// paragraphs at all, the whole layout is that gallery.
pub fn compose_body(paragraphs: &[String], image_count: usize) -> Vec<BodySegment> {
    let mut inline = (1..image_count).peekable();

    if paragraphs.is_empty() {
        let leftover: Vec<usize> = inline.collect();
        if leftover.is_empty() {
            return Vec::new();
        }
        return vec![BodySegment::Gallery { images: leftover }];
    }

    let spacing = if image_count == 0 {
        0
    } else {
        paragraphs.len() / image_count
    };

    let last = paragraphs.len() - 1;
    let mut segments = Vec::with_capacity(paragraphs.len() + 1);

    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i == 0 {
            segments.push(opener(paragraph));
        } else if i != last && spacing > 0 && i % spacing == 0 && inline.peek().is_some() {
            let image = inline.next().unwrap_or_default();
            segments.push(BodySegment::Illustrated {
                image,
                text: paragraph.clone(),
            });
        } else {
            segments.push(BodySegment::Paragraph {
                text: paragraph.clone(),
            });
        }
    }

    let leftover: Vec<usize> = inline.collect();
    if !leftover.is_empty() {
        segments.push(BodySegment::Gallery { images: leftover });
    }

    segments
}

fn opener(paragraph: &str) -> BodySegment {
    let mut chars = paragraph.chars();
    match chars.next() {
        Some(initial) => BodySegment::Opener {
            initial,
            rest: chars.as_str().to_string(),
        },
        None => BodySegment::Paragraph {
            text: String::new(),
        },
    }
}

/// CSS background for the post container: a left-to-right gradient between
/// palette entries 2 and 3, normalized to `#RRGGBB` tokens.
pub fn palette_gradient(palette: &[String]) -> String {
    let (from, to) = match (palette.get(2), palette.get(3)) {
        (Some(from), Some(to)) => (hex_token(from), hex_token(to)),
        _ => (
            DEFAULT_GRADIENT.0.to_string(),
            DEFAULT_GRADIENT.1.to_string(),
        ),
    };
    format!("linear-gradient(to right, {from}, {to})")
}

fn hex_token(token: &str) -> String {
    if token.starts_with('#') {
        token.to_string()
    } else {
        format!("#{token}")
    }
}

/// Format epoch seconds as an en-US short date (`M/D/YYYY`, no zero padding)
/// in the given timezone. Returns `None` for out-of-range timestamps.
pub fn short_date<Tz: TimeZone>(published_time: i64, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let utc: DateTime<Utc> = DateTime::from_timestamp(published_time, 0)?;
    Some(utc.with_timezone(tz).format("%-m/%-d/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paras(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_title_prefix_and_trims() {
        let body = "The Voyage\n\n  First line.\nSecond line.\n";
        let got = extract_paragraphs(Some(body), "The Voyage");
        assert_eq!(got, paras(&["First line.", "Second line."]));
        assert!(!got[0].starts_with("The Voyage"));
    }

    #[test]
    fn keeps_body_when_title_is_not_a_prefix() {
        let got = extract_paragraphs(Some("Completely unrelated body."), "The Voyage");
        assert_eq!(got, paras(&["Completely unrelated body."]));
    }

    #[test]
    fn absent_body_yields_no_paragraphs() {
        assert!(extract_paragraphs(None, "Anything").is_empty());
    }

    #[test]
    fn blank_lines_are_dropped_and_order_preserved() {
        let body = "T\r\none\r\n\r\n   \r\ntwo\nthree";
        let got = extract_paragraphs(Some(body), "T");
        assert_eq!(got, paras(&["one", "two", "three"]));
    }

    #[test]
    fn first_paragraph_becomes_drop_cap_opener() {
        let segments = compose_body(&paras(&["Once upon a time."]), 0);
        assert_eq!(
            segments,
            vec![BodySegment::Opener {
                initial: 'O',
                rest: "nce upon a time.".to_string(),
            }]
        );
    }

    #[test]
    fn opener_respects_multibyte_first_character() {
        let segments = compose_body(&paras(&["Żółć everywhere."]), 0);
        assert_eq!(
            segments[0],
            BodySegment::Opener {
                initial: 'Ż',
                rest: "ółć everywhere.".to_string(),
            }
        );
    }

    #[test]
    fn zero_images_short_circuits_spacing() {
        let segments = compose_body(&paras(&["a", "b", "c"]), 0);
        assert_eq!(segments.len(), 3);
        assert!(segments
            .iter()
            .all(|s| !matches!(s, BodySegment::Illustrated { .. } | BodySegment::Gallery { .. })));
    }

    #[test]
    fn interleaves_at_positive_multiples_of_spacing() {
        // 9 paragraphs, 4 images (1 header + 3 inline): spacing = 9 / 4 = 2.
        let p = paras(&["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8"]);
        let segments = compose_body(&p, 4);

        let inline: Vec<(usize, usize)> = segments
            .iter()
            .enumerate()
            .filter_map(|(pos, s)| match s {
                BodySegment::Illustrated { image, .. } => Some((pos, *image)),
                _ => None,
            })
            .collect();
        assert_eq!(inline, vec![(2, 1), (4, 2), (6, 3)]);
        assert!(!segments
            .iter()
            .any(|s| matches!(s, BodySegment::Gallery { .. })));
    }

    #[test]
    fn every_image_appears_exactly_once_in_order() {
        let p = paras(&["p0", "p1", "p2", "p3", "p4", "p5"]);
        let segments = compose_body(&p, 5);

        let mut seen = Vec::new();
        for segment in &segments {
            match segment {
                BodySegment::Illustrated { image, .. } => seen.push(*image),
                BodySegment::Gallery { images } => seen.extend(images.iter().copied()),
                _ => {}
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn leftover_images_form_trailing_gallery() {
        // 3 paragraphs, 3 images: spacing = 1, but the final paragraph never
        // takes an inline image, so image 2 lands in the gallery.
        let segments = compose_body(&paras(&["p0", "p1", "p2"]), 3);
        assert_eq!(
            segments.last(),
            Some(&BodySegment::Gallery { images: vec![2] })
        );
        assert!(matches!(
            segments[1],
            BodySegment::Illustrated { image: 1, .. }
        ));
    }

    #[test]
    fn more_images_than_paragraphs_collapse_to_gallery() {
        // spacing = floor(2 / 3) = 0: nothing inlined, the rest trail.
        let segments = compose_body(&paras(&["Once upon a time.", "The end."]), 3);
        assert_eq!(
            segments,
            vec![
                BodySegment::Opener {
                    initial: 'O',
                    rest: "nce upon a time.".to_string(),
                },
                BodySegment::Paragraph {
                    text: "The end.".to_string(),
                },
                BodySegment::Gallery { images: vec![1, 2] },
            ]
        );
    }

    #[test]
    fn empty_body_renders_non_header_images_as_gallery() {
        let segments = compose_body(&[], 4);
        assert_eq!(
            segments,
            vec![BodySegment::Gallery {
                images: vec![1, 2, 3],
            }]
        );
    }

    #[test]
    fn empty_body_with_single_image_renders_nothing() {
        assert!(compose_body(&[], 1).is_empty());
        assert!(compose_body(&[], 0).is_empty());
    }

    #[test]
    fn gradient_uses_palette_entries_two_and_three() {
        let palette: Vec<String> = ["aabbcc", "112233", "445566", "778899"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            palette_gradient(&palette),
            "linear-gradient(to right, #445566, #778899)"
        );
    }

    #[test]
    fn gradient_keeps_already_prefixed_tokens() {
        let palette: Vec<String> = ["#000", "#111", "#222", "#333"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            palette_gradient(&palette),
            "linear-gradient(to right, #222, #333)"
        );
    }

    #[test]
    fn short_palette_falls_back_to_neutral_gradient() {
        let palette: Vec<String> = vec!["aabbcc".to_string()];
        assert_eq!(
            palette_gradient(&palette),
            "linear-gradient(to right, #e8e8e8, #f5f5f5)"
        );
        assert_eq!(
            palette_gradient(&[]),
            "linear-gradient(to right, #e8e8e8, #f5f5f5)"
        );
    }

    #[test]
    fn formats_epoch_seconds_as_en_us_short_date() {
        assert_eq!(
            short_date(1_600_000_000, &Utc).as_deref(),
            Some("9/13/2020")
        );
    }

    #[test]
    fn short_date_has_no_zero_padding() {
        // 2021-02-03 00:00:00 UTC
        assert_eq!(short_date(1_612_310_400, &Utc).as_deref(), Some("2/3/2021"));
    }

    #[test]
    fn out_of_range_timestamp_yields_none() {
        assert_eq!(short_date(i64::MAX, &Utc), None);
    }
}
