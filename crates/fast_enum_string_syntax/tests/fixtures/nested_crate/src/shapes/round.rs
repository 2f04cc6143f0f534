pub enum Curve {
    Circle(f64),
    Ellipse { a: f64, b: f64 },
}
