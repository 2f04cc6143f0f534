pub enum Root {
    Alpha,
    Beta,
}

pub mod shapes;
pub mod util;

pub mod inline {
    pub mod deeper;
}

#[path = "extra/renamed.rs"]
pub mod custom;

#[cfg(test)]
mod tests;
