pub mod r#async {
    #[allow(non_camel_case_types)]
    pub enum Kind {
        r#type,
        Plain,
        Self_,
    }
}
