/// Render extracted text for people: newlines and carriage returns are
/// deleted and each tab becomes four spaces.
///
/// Only used for output. Fingerprints are always computed from the raw
/// extracted text, never from this.
pub fn display_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | '\r' => {}
            '\t' => out.push_str("    "),
            _ => out.push(c),
        }
    }
    out
}
