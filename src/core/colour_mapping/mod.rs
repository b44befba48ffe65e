pub mod mapper;
pub mod palette;
pub mod settings;
