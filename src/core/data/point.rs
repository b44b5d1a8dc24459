/// A pixel coordinate. Signed so cursor positions outside the frame can be
/// represented and mapped onto the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
