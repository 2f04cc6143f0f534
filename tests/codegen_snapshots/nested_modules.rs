pub mod a {
    pub mod b {
        pub enum EnumName {
            First,
            Second,
        }
    }

    pub enum Middle {
        Zeta,
        Alpha,
    }
}

pub enum Top {
    Only,
}
