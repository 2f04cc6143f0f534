pub mod helpers;

pub enum Level {
    Low,
    High,
}
