mod screen;

pub use screen::MenuScreen;
