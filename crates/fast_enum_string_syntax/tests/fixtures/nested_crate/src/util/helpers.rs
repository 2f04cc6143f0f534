pub enum Mode {
    Fast,
}
