//! 8-bit sRGB colour and the perceptual (HCL) blend used for smooth colouring.
//!
//! HCL here is CIE LCh(ab) under the D65 white point: lightness, chroma and
//! hue in degrees. Blending in it keeps perceived brightness changing evenly
//! between neighbouring palette entries.

use std::f64::consts::PI;

const WHITE_X: f64 = 0.950_47;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_83;

const LAB_DELTA: f64 = 6.0 / 29.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA bytes.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Blends toward `other` by `t` in HCL space, taking the short way round
    /// the hue circle. `t` outside `(0, 1)` (or NaN) returns an endpoint.
    #[must_use]
    pub fn blend_hcl(self, other: Self, t: f64) -> Self {
        if t.is_nan() || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }

        let from = Hcl::from_colour(self);
        let to = Hcl::from_colour(other);

        Hcl {
            hue: interpolate_angle(from.hue, to.hue, t),
            chroma: from.chroma + t * (to.chroma - from.chroma),
            lightness: from.lightness + t * (to.lightness - from.lightness),
        }
        .to_colour()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Hcl {
    hue: f64,
    chroma: f64,
    lightness: f64,
}

impl Hcl {
    fn from_colour(colour: Colour) -> Self {
        let r = srgb_to_linear(colour.r);
        let g = srgb_to_linear(colour.g);
        let b = srgb_to_linear(colour.b);

        let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
        let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
        let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        let lightness = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        let hue = b.atan2(a).to_degrees().rem_euclid(360.0);

        Self {
            hue,
            chroma: a.hypot(b),
            lightness,
        }
    }

    fn to_colour(self) -> Colour {
        let radians = self.hue * PI / 180.0;
        let a = self.chroma * radians.cos();
        let b = self.chroma * radians.sin();

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let x = WHITE_X * lab_f_inverse(fx);
        let y = WHITE_Y * lab_f_inverse(fy);
        let z = WHITE_Z * lab_f_inverse(fz);

        let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
        let g = -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z;
        let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;

        Colour::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }
}

fn interpolate_angle(from: f64, to: f64, t: f64) -> f64 {
    let delta = ((to - from).rem_euclid(360.0) + 540.0).rem_euclid(360.0) - 180.0;
    (from + t * delta).rem_euclid(360.0)
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;

    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// Out-of-gamut values are clamped; NaN ends up as 0.
fn linear_to_srgb(linear: f64) -> u8 {
    let c = if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };

    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_DELTA * LAB_DELTA * LAB_DELTA {
        t.cbrt()
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inverse(t: f64) -> f64 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    }
}
