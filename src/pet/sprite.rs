//! Deterministic sprite generation - one small SVG per pet, derived from a
//! seed so the same pet always renders the same.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Body colors, indexed by the seed hash.
const PALETTE: [&str; 6] = [
    "#FF9664", "#64A0FF", "#64FF64", "#C864FF", "#FF96C8", "#FFC864",
];

/// Render the sprite for `seed` as a `data:image/svg+xml;base64,` URL.
///
/// Pure and deterministic; called exactly once per spawn (with a seed
/// derived from the owner id and spawn time) unless the caller supplies a
/// pre-rendered sprite instead.
pub fn generate(seed: &str) -> String {
    let color = PALETTE[hash(seed) as usize % PALETTE.len()];
    let svg = format!(
        r#"<svg width="16" height="16" xmlns="http://www.w3.org/2000/svg"><rect x="2" y="2" width="12" height="12" fill="{color}" rx="2"/><circle cx="6" cy="6" r="1" fill="black"/><circle cx="10" cy="6" r="1" fill="black"/><path d="M 5 10 Q 8 12 11 10" stroke="black" fill="none"/></svg>"#
    );
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

/// 32-bit wrapping string hash: h = (h << 5) - h + byte, i.e. h*31 + byte.
fn hash(seed: &str) -> u32 {
    let mut h: i32 = 0;
    for b in seed.bytes() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(b));
    }
    h.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sprite() {
        assert_eq!(generate("u1-12345"), generate("u1-12345"));
    }

    #[test]
    fn seeds_map_to_different_palette_slots() {
        // "a" hashes to 97 (slot 1), "b" to 98 (slot 2).
        assert_ne!(generate("a"), generate("b"));
    }

    #[test]
    fn output_is_a_data_url() {
        let sprite = generate("whoever");
        assert!(sprite.starts_with("data:image/svg+xml;base64,"));
        // Payload must be valid base64.
        let payload = &sprite["data:image/svg+xml;base64,".len()..];
        let decoded = BASE64.decode(payload).unwrap();
        let svg = String::from_utf8(decoded).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("rx=\"2\""));
    }
}
