mod fields;
mod impls;
mod requests;
mod responses;

pub use fields::*;
pub use requests::*;
pub use responses::*;
