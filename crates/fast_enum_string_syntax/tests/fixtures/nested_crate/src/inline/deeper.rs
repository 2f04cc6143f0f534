pub enum Depth {
    One,
    Two,
    Three,
}
