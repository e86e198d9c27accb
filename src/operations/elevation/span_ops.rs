use crate::geometry::Span;

/// Default tolerance for merging and trimming spans.
pub const SPAN_EPSILON: f64 = 1e-6;

/// Merges overlapping or touching spans into a sorted, non-overlapping set.
///
/// Spans closer than `eps` are merged. The result does not depend on input
/// order, and applying it again changes nothing. Non-finite spans are dropped.
#[must_use]
pub fn union_spans(spans: &[Span], eps: f64) -> Vec<Span> {
    let eps = clamp_eps(eps);
    let mut sorted: Vec<Span> = spans
        .iter()
        .filter(|s| s.start.is_finite() && s.end.is_finite())
        .map(|s| Span::new(s.start, s.end))
        .collect();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start).then(a.end.total_cmp(&b.end)));

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        if let Some(last) = merged.last_mut() {
            if span.overlaps(last, eps) {
                last.end = last.end.max(span.end);
                continue;
            }
        }
        merged.push(span);
    }
    merged
}

/// Removes every `cut` span from each `base` span.
///
/// A base span may split into several fragments; fragments shorter than
/// `eps` are dropped. Output follows the order of `base`.
#[must_use]
pub fn subtract_spans(base: &[Span], cut: &[Span], eps: f64) -> Vec<Span> {
    let eps = clamp_eps(eps);
    let cuts = union_spans(cut, eps);
    let mut out = Vec::with_capacity(base.len());

    for b in base {
        let b = Span::new(b.start, b.end);
        let mut cursor = b.start;
        for c in &cuts {
            if c.end <= cursor {
                continue;
            }
            if c.start >= b.end {
                break;
            }
            if c.start > cursor {
                push_fragment(&mut out, cursor, c.start, eps);
            }
            cursor = cursor.max(c.end);
            if cursor >= b.end {
                break;
            }
        }
        push_fragment(&mut out, cursor, b.end, eps);
    }
    out
}

/// Sum of span lengths.
#[must_use]
pub fn total_length(spans: &[Span]) -> f64 {
    spans.iter().map(Span::length).sum()
}

fn push_fragment(out: &mut Vec<Span>, start: f64, end: f64, eps: f64) {
    let len = end - start;
    if len > 0.0 && len >= eps {
        out.push(Span { start, end });
    }
}

fn clamp_eps(eps: f64) -> f64 {
    if eps.is_finite() {
        eps.max(0.0)
    } else {
        0.0
    }
}
