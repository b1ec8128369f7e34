// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient detection and color-token extraction.
//!
//! Configured colors are opaque style strings. A string is treated as a
//! gradient when it contains the literal marker `"gradient"`; its stop
//! colors are then scavenged out of the embedded color tokens. This is a
//! deliberately small scanner, not a CSS color grammar: the input space is
//! the application's own preset list, and anything it cannot make sense of
//! falls back to a fixed two-stop default.

use alloc::string::{String, ToString};
use smallvec::SmallVec;

/// One radial-gradient color stop.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Stop position in `[0, 1]`.
    pub offset: f64,
    /// Stop color (solid style string).
    pub color: String,
}

/// Gradient stops, at most three (start, optional middle, end).
pub type GradientStops = SmallVec<[ColorStop; 3]>;

/// Fallback gradient used when a gradient-marked string yields fewer than
/// two color tokens.
const FALLBACK: [&str; 2] = ["#8e2de2", "#4a00e0"];

/// Whether a configured style string describes a gradient.
pub fn is_gradient(style: &str) -> bool {
    style.contains("gradient")
}

/// Extract up to three gradient stops from a gradient description.
///
/// Recognized tokens are hex colors (`#rgb`, `#rgba`, `#rrggbb`,
/// `#rrggbbaa`) and the functional forms `rgb()`, `rgba()`, `hsl()`,
/// `hsla()`. Two tokens become stops at 0 and 1; three become stops at 0,
/// 0.5, and 1. Fewer than two yields the fallback pair.
///
/// ```
/// use plexus_anim::gradient_stops;
///
/// let stops = gradient_stops("linear-gradient(135deg, #667eea 0%, #764ba2 100%)");
/// assert_eq!(stops.len(), 2);
/// assert_eq!(stops[0].color, "#667eea");
/// assert_eq!(stops[1].offset, 1.0);
/// ```
pub fn gradient_stops(style: &str) -> GradientStops {
    let tokens = color_tokens(style);
    let mut out = GradientStops::new();
    match tokens.len() {
        0 | 1 => {
            out.push(ColorStop {
                offset: 0.0,
                color: FALLBACK[0].to_string(),
            });
            out.push(ColorStop {
                offset: 1.0,
                color: FALLBACK[1].to_string(),
            });
        }
        2 => {
            for (i, color) in tokens.into_iter().enumerate() {
                out.push(ColorStop {
                    offset: i as f64,
                    color,
                });
            }
        }
        _ => {
            for (offset, color) in [0.0, 0.5, 1.0].into_iter().zip(tokens) {
                out.push(ColorStop { offset, color });
            }
        }
    }
    out
}

/// Scan out up to three color tokens. Byte-based; all recognized tokens are
/// pure ASCII, so slicing on scanner offsets is always valid.
fn color_tokens(style: &str) -> SmallVec<[String; 3]> {
    const FUNCS: [&[u8]; 4] = [b"rgba(", b"rgb(", b"hsla(", b"hsl("];

    let bytes = style.as_bytes();
    let mut out = SmallVec::new();
    let mut i = 0;
    'scan: while i < bytes.len() && out.len() < 3 {
        if bytes[i] == b'#' {
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
                i += 1;
            }
            if matches!(i - start - 1, 3 | 4 | 6 | 8)
                && let Ok(token) = core::str::from_utf8(&bytes[start..i])
            {
                out.push(token.to_string());
            }
            continue;
        }
        for func in FUNCS {
            if bytes[i..].starts_with(func) {
                let body = &bytes[i + func.len()..];
                if let Some(close) = body.iter().position(|&b| b == b')') {
                    let end = i + func.len() + close + 1;
                    if let Ok(token) = core::str::from_utf8(&bytes[i..end]) {
                        out.push(token.to_string());
                    }
                    i = end;
                    continue 'scan;
                }
            }
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_detection_is_a_substring_check() {
        assert!(is_gradient("linear-gradient(90deg, #fff, #000)"));
        assert!(is_gradient("radial-gradient(circle, #fff, #000)"));
        assert!(!is_gradient("#8b5cf6"));
        assert!(!is_gradient("rgba(139, 92, 246, 1)"));
    }

    #[test]
    fn two_hex_tokens_become_endpoint_stops() {
        let stops = gradient_stops("linear-gradient(135deg, #667eea 0%, #764ba2 100%)");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0], ColorStop { offset: 0.0, color: "#667eea".into() });
        assert_eq!(stops[1], ColorStop { offset: 1.0, color: "#764ba2".into() });
    }

    #[test]
    fn three_tokens_get_a_middle_stop() {
        let stops =
            gradient_stops("linear-gradient(90deg, #ff0000, rgba(0, 255, 0, 0.5), #0000ff)");
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color, "#ff0000");
        assert_eq!(stops[1], ColorStop { offset: 0.5, color: "rgba(0, 255, 0, 0.5)".into() });
        assert_eq!(stops[2].color, "#0000ff");
    }

    #[test]
    fn extra_tokens_are_ignored_past_three() {
        let stops = gradient_stops("linear-gradient(#111, #222, #333, #444)");
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[2].color, "#333");
    }

    #[test]
    fn marker_without_tokens_falls_back() {
        let stops = gradient_stops("gradient");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].color, FALLBACK[0]);
        assert_eq!(stops[1].color, FALLBACK[1]);
    }

    #[test]
    fn single_token_falls_back_too() {
        // The marker substring check can match strings that are not real
        // gradient descriptions; with fewer than two tokens the fixed pair
        // is used.
        let stops = gradient_stops("my-gradient-ish #abc");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].color, FALLBACK[0]);
    }

    #[test]
    fn malformed_hex_lengths_are_not_tokens() {
        // Five hex digits is not a color; the scanner rejects the run.
        assert_eq!(color_tokens("#12345").len(), 0);
        assert_eq!(color_tokens("#123456").len(), 1);
        assert_eq!(color_tokens("#1234567890ab").len(), 0);
    }

    #[test]
    fn short_hex_and_functional_forms() {
        let tokens = color_tokens("hsl(260, 80%, 60%) then #f0f");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], "hsl(260, 80%, 60%)");
        assert_eq!(tokens[1], "#f0f");
    }
}
