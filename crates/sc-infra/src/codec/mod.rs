pub mod passthrough;

pub use passthrough::PassthroughCodec;
