pub mod constant_driver;
