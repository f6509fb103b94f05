// Feature modules

pub mod codec;
