use crate::core::data::colour::Colour;

pub const GRADIENT_LEN: usize = 256;

fn sample(gradient: fn(f64) -> Colour) -> Vec<Colour> {
    (0..GRADIENT_LEN)
        .map(|i| gradient(i as f64 / GRADIENT_LEN as f64))
        .collect()
}

#[must_use]
pub fn fire_colours() -> Vec<Colour> {
    sample(fire)
}

#[must_use]
pub fn blue_white_colours() -> Vec<Colour> {
    sample(blue_white)
}

/// Black through red, orange and yellow to white over `t` in `[0, 1)`.
fn fire(t: f64) -> Colour {
    if t < 0.25 {
        let local_t = t / 0.25;
        Colour::new((local_t * 255.0) as u8, 0, 0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        Colour::new(255, (local_t * 165.0) as u8, 0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        Colour::new(255, (165.0 + local_t * 90.0) as u8, 0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        Colour::new(255, 255, (local_t * 255.0) as u8)
    }
}

// Bernstein-style polynomials; dark at both ends, bright blue-white between.
fn blue_white(t: f64) -> Colour {
    let s = 1.0 - t;

    Colour::new(
        (9.0 * s * t * t * t * 255.0) as u8,
        (15.0 * s * s * t * t * 255.0) as u8,
        (8.5 * s * s * s * t * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradients_have_fixed_length() {
        assert_eq!(fire_colours().len(), GRADIENT_LEN);
        assert_eq!(blue_white_colours().len(), GRADIENT_LEN);
    }

    #[test]
    fn test_fire_stops() {
        let colours = fire_colours();

        assert_eq!(colours[0], Colour::BLACK);
        assert_eq!(colours[64], Colour::new(255, 0, 0));
        assert_eq!(colours[128], Colour::new(255, 165, 0));
        assert_eq!(colours[192], Colour::new(255, 255, 0));
        assert!(colours[255].b > 240);
    }

    #[test]
    fn test_blue_white_samples() {
        assert_eq!(blue_white(0.0), Colour::BLACK);
        assert_eq!(blue_white(0.5), Colour::new(143, 239, 135));
        assert_eq!(blue_white(0.25), Colour::new(26, 134, 228));
    }
}
