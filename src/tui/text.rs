//! Text wrapping for bubbles.

/// Split a message into display lines respecting its newlines, then wrap to `width` columns.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() || width == 0 {
            out.push(line.to_string());
            continue;
        }
        out.extend(textwrap::wrap(line, width).into_iter().map(|cow| cow.into_owned()));
    }
    out
}

/// Display width in terminal columns.
pub(crate) fn display_width(s: &str) -> usize {
    textwrap::core::display_width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_words() {
        let lines = wrap_message("The Apple Intelligence effect looks stunning!", 20);
        assert_eq!(
            lines,
            ["The Apple", "Intelligence effect", "looks stunning!"]
        );
    }

    #[test]
    fn keeps_explicit_newlines() {
        assert_eq!(wrap_message("a\n\nb", 10), ["a", "", "b"]);
    }

    #[test]
    fn zero_width_does_not_wrap() {
        assert_eq!(wrap_message("hello world", 0), ["hello world"]);
    }

    #[test]
    fn width_counts_columns() {
        assert_eq!(display_width("Message..."), 10);
        assert_eq!(display_width("╭─╮"), 3);
    }
}
