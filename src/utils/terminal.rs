//! Terminal output sanitization.
//!
//! Roster files are plain user-editable JSONL, so every string that ends up
//! on screen (names, units, emails, device models) is attacker-controllable.
//! Embedded ANSI escape sequences could move the cursor, recolor the UI, or
//! clear the screen mid-draw. [`strip_ansi_codes`] is applied to row and
//! detail text before it reaches the terminal.

/// Strips ANSI escape codes and stray control characters from a string.
///
/// Removes CSI sequences (`ESC [ ... letter`) and control characters other
/// than tab, newline, and carriage return.
///
/// # Examples
///
/// ```
/// use staffscope::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mLina\x1b[0m Haddad";
/// assert_eq!(strip_ansi_codes(text), "Lina Haddad");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ ... terminated by an ASCII letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}
