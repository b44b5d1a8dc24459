pub mod algorithm;
pub mod colour_mapping;
pub mod mandelbrot_config;
pub mod palettes;
