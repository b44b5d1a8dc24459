//! The 256-colour Plan 9 palette.
//!
//! The table is a 4x4x4 RGB cube crossed with four grey levels. Each cube
//! entry is scaled so its brightest channel lands on one of the grey steps,
//! which gives a roughly uniform spread of brightness across the table.

use crate::core::data::colour::Colour;

pub const PLAN9_LEN: usize = 256;

#[must_use]
pub fn plan9_colours() -> Vec<Colour> {
    let mut colours = vec![Colour::BLACK; PLAN9_LEN];

    for r in 0..4_u32 {
        for v in 0..4_u32 {
            let base = 16 * (4 * r + v) as usize;

            for g in 0..4_u32 {
                for b in 0..4_u32 {
                    // The low nibble rotates with the grey level so that
                    // neighbouring entries differ in hue, not just brightness.
                    let offset = (4 * g + b + v).wrapping_sub(r) & 0x0f;
                    colours[base + offset as usize] = plan9_entry(r, g, b, v);
                }
            }
        }
    }

    colours
}

fn plan9_entry(r: u32, g: u32, b: u32, v: u32) -> Colour {
    let den = r.max(g).max(b);

    if den == 0 {
        let grey = (17 * v) as u8;
        return Colour::new(grey, grey, grey);
    }

    let num = 17 * (4 * den + v);
    let channel = |c: u32| (c * num / den) as u8;

    Colour::new(channel(r), channel(g), channel(b))
}
