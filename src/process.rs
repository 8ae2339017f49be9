use crate::model::Root;

/// Separator placed between chunk texts in the plain-text output.
pub const CHUNK_SEPARATOR: &str = "\n---\n";

/// Join the surviving chunk texts into one document.
///
/// Texts are copied verbatim (no trimming, no escaping) in source order.
/// Zero survivors produce the empty string; a single survivor produces its
/// text with no separator. Pure function.
pub fn process_chunks(root: &Root) -> String {
    let texts: Vec<&str> = root.surviving_chunks().map(|c| c.text.as_str()).collect();
    texts.join(CHUNK_SEPARATOR)
}
