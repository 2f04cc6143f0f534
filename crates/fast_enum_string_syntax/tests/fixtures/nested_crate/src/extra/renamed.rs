pub enum Custom {}
