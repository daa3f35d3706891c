use billhash_core::fingerprint::fingerprint_text;
use billhash_core::text::canonicalize;

pub fn run(text: &str) {
    let canonical = canonicalize(text);
    println!("canonical:   {canonical}");
    println!("fingerprint: {}", fingerprint_text(&canonical));
}
