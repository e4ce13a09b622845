pub mod captions;
pub mod extraction;
pub mod publishing;
