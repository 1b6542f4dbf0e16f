//! Canned replies for a handful of conversational phrases.
//!
//! These are answered locally without a backend round trip. Matching is
//! exact on the trimmed, ASCII-lowercased input, so "hello bot!" or
//! "hello bot there" fall through to the backend.

const REPLIES: &[(&str, &str)] = &[
    ("hello bot", "Hello there! Thanks for the friendly greeting!"),
    (
        "how are you",
        "I'm doing great! Ready to help you with all your college questions!",
    ),
    ("thank you", "You're very welcome! Happy to help!"),
    ("good job", "Thank you! I try my best to be helpful!"),
    ("awesome", "Glad you think so! Let me know if you need anything else!"),
];

/// Look up a canned reply for `input`, if one exists.
pub fn reply_for(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_ascii_lowercase();
    REPLIES
        .iter()
        .find(|(phrase, _)| *phrase == needle)
        .map(|(_, reply)| *reply)
}
