pub mod assets;
pub mod console;
