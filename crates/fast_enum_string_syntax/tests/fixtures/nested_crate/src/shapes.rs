pub mod round;

pub enum Polygon {
    Triangle,
    Square,
}
