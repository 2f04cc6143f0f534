pub mod missing;

pub enum Fine {
    Ok,
}
