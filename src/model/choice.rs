/// A closed set of options offered by a select-style form field.
///
/// Implementors list their variants in display order; the draft stores the
/// chosen [`label`](Choice::label) as plain text.
pub trait Choice: Copy + PartialEq + 'static {
    /// Returns all options in display order.
    fn all() -> &'static [Self];

    /// Returns the display label, which is also the stored value.
    fn label(self) -> &'static str;

    /// Looks up an option by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }
}

/// Returns the label after (or before) `current` in `C`'s option list, wrapping around.
///
/// An unrecognized `current` (including the empty "not selected" value)
/// starts from the first option going forward, or the last going backward.
pub fn cycle<C: Choice>(current: &str, forward: bool) -> &'static str {
    let items = C::all();
    let next = match items.iter().position(|c| c.label() == current) {
        Some(pos) if forward => (pos + 1) % items.len(),
        Some(pos) => (pos + items.len() - 1) % items.len(),
        None if forward => 0,
        None => items.len() - 1,
    };
    items[next].label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingVia, Country};

    #[test]
    fn from_label_finds_exact_match() {
        assert_eq!(BookingVia::from_label("Agoda"), Some(BookingVia::Agoda));
        assert_eq!(BookingVia::from_label("agoda"), None);
    }

    #[test]
    fn cycle_forward_from_unselected_picks_first() {
        assert_eq!(cycle::<BookingVia>("", true), "Direct");
    }

    #[test]
    fn cycle_backward_from_unselected_picks_last() {
        assert_eq!(cycle::<BookingVia>("", false), "Agoda");
    }

    #[test]
    fn cycle_forward_wraps() {
        assert_eq!(cycle::<BookingVia>("Agoda", true), "Direct");
        assert_eq!(cycle::<Country>("South Africa", true), "India");
    }

    #[test]
    fn cycle_backward_wraps() {
        assert_eq!(cycle::<Country>("India", false), "South Africa");
    }

    #[test]
    fn cycle_steps_one_option() {
        assert_eq!(cycle::<Country>("India", true), "United States");
        assert_eq!(cycle::<Country>("Canada", false), "United Kingdom");
    }
}
