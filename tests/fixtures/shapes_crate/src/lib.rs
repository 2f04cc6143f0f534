pub enum TestEnum {
    Q,
    W,
    E,
    R,
    T,
    Y,
}

pub mod shapes;

pub mod config {
    pub enum Mode {
        Debug,
        Release,
    }

    pub mod r#async {
        pub enum Kind {
            r#type,
            Plain,
        }
    }
}

pub enum Empty {}

pub fn helper() {
    enum Local {
        Inner,
    }
    let _ = Local::Inner;
}

#[cfg(test)]
mod tests {
    enum OnlyInTests {
        A,
    }
}
